use std::{path::PathBuf, sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::io::AsyncReadExt;

use crate::{
    Res,
    builder::{PlaylistBuilder, SearchPolicy},
    config::Config,
    error, info,
    spotify::auth::request_authorization_code,
    success,
    types::{PlaylistReport, PlaylistRequest},
    utils, warning,
};

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// JSON event file, `-` for stdin. Takes precedence over the flags below.
    pub event: Option<PathBuf>,
    pub name: Option<String>,
    pub songs: usize,
    pub artists: Vec<String>,
    pub artists_file: Option<PathBuf>,
    pub auth_code: Option<String>,
    pub concurrency: usize,
    pub skip_failed_searches: bool,
    pub json: bool,
}

pub async fn build(opts: BuildOptions) {
    let config = match Config::from_env() {
        Ok(c) => Arc::new(c),
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let request = match load_request(&opts, Arc::clone(&config)).await {
        Ok(r) => r,
        Err(e) => error!("Cannot read playlist request. Err: {}", e),
    };

    // with --json only the report goes to stdout
    if !opts.json {
        if request.artist_list.is_empty() {
            warning!("The lineup is empty, the playlist will have no tracks");
        }

        info!(
            "Building {} with up to {} tracks for {} artists",
            utils::playlist_title(&request.playlist_name),
            request.number_of_songs_to_add,
            request.artist_list.len()
        );
    }

    let policy = if opts.skip_failed_searches {
        SearchPolicy::SkipOnError
    } else {
        SearchPolicy::BestEffort
    };

    let progress = if opts.json {
        ProgressBar::hidden()
    } else {
        progress_bar()
    };

    let builder = PlaylistBuilder::from_shared(config)
        .concurrency(opts.concurrency)
        .search_policy(policy)
        .progress(progress)
        .quiet(opts.json);

    match builder.run(&request).await {
        Ok(report) => print_report(&report, opts.json),
        Err(e) => error!("Playlist build failed. Err: {}", e),
    }
}

async fn load_request(opts: &BuildOptions, config: Arc<Config>) -> Res<PlaylistRequest> {
    if let Some(event) = &opts.event {
        let json = read_input(event).await?;
        return Ok(PlaylistRequest::from_json(&json)?);
    }

    let playlist_name = opts
        .name
        .clone()
        .ok_or("either --event or --name is required")?;

    let mut artist_list = opts.artists.clone();
    if let Some(path) = &opts.artists_file {
        artist_list.extend(utils::parse_lineup(&read_input(path).await?));
    }

    let auth_code = match &opts.auth_code {
        Some(code) => code.clone(),
        None => {
            if !opts.json {
                info!("No authorization code given, opening the Spotify consent page...");
            }
            request_authorization_code(config).await?
        }
    };

    Ok(PlaylistRequest {
        playlist_name,
        auth_code,
        number_of_songs_to_add: opts.songs,
        artist_list,
    })
}

async fn read_input(path: &PathBuf) -> Res<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        return Ok(buf);
    }
    Ok(async_fs::read_to_string(path).await?)
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{bar:30.blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .progress_chars("=> "),
    );
    pb
}

fn print_report(report: &PlaylistReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Cannot serialize report. Err: {}", e),
        }
        return;
    }

    if !report.artists.is_empty() {
        println!("{}", Table::new(utils::report_table_rows(report)));
    }

    success!(
        "Playlist {} ({}) has {} new tracks",
        report.playlist.name,
        report.playlist.id,
        report.track_count()
    );

    if !report.failed.is_empty() {
        warning!(
            "{} artists could not be resolved: {}",
            report.failed.len(),
            report.failed.artists().join(", ")
        );
    }
}
