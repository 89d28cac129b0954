//! # CLI Module
//!
//! Command implementations behind the `lineuptunes` binary. Each command
//! loads what it needs, delegates to the library and presents the result.
//! Fatal problems end the process through the `error!` macro; everything
//! else is reported with `info!`, `success!` and `warning!`.
//!
//! ## Commands
//!
//! - [`build`] - Build one playlist from a JSON event or from flags. Without
//!   an authorization code the browser consent flow is started first.
//! - [`serve`] - Run the local HTTP server (`/health`, `/callback`,
//!   `/playlist`) so other tools can submit lineup requests.
//!
//! ## Usage
//!
//! ```bash
//! lineuptunes build --event lineup.json
//! lineuptunes build --name "Field Day 2025" --songs 3 --artist "Bicep" --artist "Floating Points"
//! lineuptunes build --name "Primavera" --artists-file lineup.txt --concurrency 4
//! lineuptunes serve
//! ```

mod build;
mod serve;

pub use build::BuildOptions;
pub use build::build;
pub use serve::serve;
