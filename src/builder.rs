//! # Playlist Builder
//!
//! Runs one lineup request end to end:
//!
//! ```text
//! exchange code -> current user -> create playlist
//!     -> for each artist: search -> top tracks -> append
//!     -> report
//! ```
//!
//! The three setup steps are fatal: if any of them fails, [`PlaylistBuilder::run`]
//! returns the error and a playlist that may already exist is left as is.
//! Everything after that is per artist. A failed search or top-track lookup
//! puts the artist in the [`FailureReport`] and the run moves on.
//!
//! Artist lookups run as tokio tasks in batches of `concurrency` artists
//! (one by default, which keeps every call strictly sequential). Each batch
//! is joined in input order and appended before the next batch starts, so
//! tracks always land in lineup order.

use std::sync::Arc;

use indicatif::ProgressBar;

use crate::{
    config::Config,
    error::LineupError,
    info,
    spotify::SpotifyClient,
    success,
    types::{ArtistResolution, FailureReport, Playlist, PlaylistReport, PlaylistRequest, Session},
    utils, warning,
};

/// What to do with a search response whose status is above 200.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Record the failure and still use an artist id if the body has one.
    #[default]
    BestEffort,
    /// Record the failure and drop the artist.
    SkipOnError,
}

pub struct PlaylistBuilder {
    client: SpotifyClient,
    concurrency: usize,
    search_policy: SearchPolicy,
    progress: ProgressBar,
    quiet: bool,
}

/// A resolution plus the reason it failed, if it did.
struct ArtistLookup {
    resolution: ArtistResolution,
    failure: Option<String>,
}

impl PlaylistBuilder {
    pub fn new(config: Config) -> Self {
        Self::from_shared(Arc::new(config))
    }

    pub fn from_shared(config: Arc<Config>) -> Self {
        Self {
            client: SpotifyClient::new(config),
            concurrency: 1,
            search_policy: SearchPolicy::default(),
            progress: ProgressBar::hidden(),
            quiet: false,
        }
    }

    /// Number of artists looked up at the same time. Values below one are
    /// treated as one.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn search_policy(mut self, policy: SearchPolicy) -> Self {
        self.search_policy = policy;
        self
    }

    /// Progress bar advanced once per artist. Log lines are printed around it.
    pub fn progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Silences the builder's console lines. The report still carries every
    /// failure.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Builds the playlist described by `request`.
    ///
    /// # Errors
    ///
    /// Fails only during setup: token exchange, user lookup or playlist
    /// creation. Per-artist problems are returned in
    /// [`PlaylistReport::failed`].
    pub async fn run(&self, request: &PlaylistRequest) -> Result<PlaylistReport, LineupError> {
        let session = self.open_session(&request.auth_code).await?;

        let title = utils::playlist_title(&request.playlist_name);
        let playlist = self
            .client
            .create_playlist(&session.access_token, &session.user_id, &title)
            .await?;
        self.log(|| success!("Created playlist {} ({})", playlist.name, playlist.id));

        self.progress.set_length(request.artist_list.len() as u64);

        let mut failed = FailureReport::default();
        let mut artists = Vec::with_capacity(request.artist_list.len());

        for batch in request.artist_list.chunks(self.concurrency) {
            let lookups = self
                .resolve_batch(&session, batch, request.number_of_songs_to_add)
                .await;

            for lookup in lookups {
                let resolution = lookup.resolution;
                self.progress.set_message(resolution.artist_name.clone());

                if let Some(reason) = lookup.failure {
                    self.log(|| warning!("{}: {}", resolution.artist_name, reason));
                    failed.record(&resolution.artist_name);
                }
                if resolution.artist_id.is_some() {
                    self.append(&session, &playlist, &resolution).await;
                }

                self.progress.inc(1);
                artists.push(resolution);
            }
        }
        self.progress.finish_and_clear();

        if !failed.is_empty() {
            self.log(|| warning!("Bad artist search: {}", failed.artists().join(", ")));
        }

        Ok(PlaylistReport {
            playlist,
            artists,
            failed,
        })
    }

    async fn open_session(&self, auth_code: &str) -> Result<Session, LineupError> {
        let access_token = self.client.exchange_code(auth_code).await?;
        let user_id = self.client.current_user_id(&access_token).await?;
        self.log(|| info!("Signed in as {}", user_id));

        Ok(Session {
            access_token,
            user_id,
        })
    }

    async fn resolve_batch(
        &self,
        session: &Session,
        batch: &[String],
        limit: usize,
    ) -> Vec<ArtistLookup> {
        let handles: Vec<_> = batch
            .iter()
            .map(|artist_name| {
                let client = self.client.clone();
                let token = session.access_token.clone();
                let artist_name = artist_name.clone();
                let policy = self.search_policy;
                tokio::spawn(async move {
                    resolve_artist(&client, &token, &artist_name, limit, policy).await
                })
            })
            .collect();

        let mut lookups = Vec::with_capacity(handles.len());
        for (handle, artist_name) in handles.into_iter().zip(batch) {
            match handle.await {
                Ok(lookup) => lookups.push(lookup),
                Err(e) => lookups.push(ArtistLookup {
                    resolution: ArtistResolution::unresolved(artist_name.as_str()),
                    failure: Some(format!("task join error: {}", e)),
                }),
            }
        }
        lookups
    }

    async fn append(&self, session: &Session, playlist: &Playlist, resolution: &ArtistResolution) {
        if resolution.track_uris.is_empty() {
            self.log(|| info!("No tracks to add for {}", resolution.artist_name));
            return;
        }

        match self
            .client
            .add_tracks(
                &session.access_token,
                &playlist.id,
                resolution.track_uris.clone(),
            )
            .await
        {
            Ok(status) if status.is_success() => self.log(|| {
                info!(
                    "Added {} tracks by {}",
                    resolution.track_uris.len(),
                    resolution.artist_name
                )
            }),
            Ok(status) => self.log(|| {
                warning!(
                    "Adding tracks by {} returned {}",
                    resolution.artist_name,
                    status
                )
            }),
            Err(e) => self.log(|| {
                warning!("Adding tracks by {} failed: {}", resolution.artist_name, e)
            }),
        }
    }

    fn log<F: FnOnce()>(&self, f: F) {
        if self.quiet {
            return;
        }
        self.progress.suspend(f);
    }
}

async fn resolve_artist(
    client: &SpotifyClient,
    token: &str,
    artist_name: &str,
    limit: usize,
    policy: SearchPolicy,
) -> ArtistLookup {
    let mut resolution = ArtistResolution::unresolved(artist_name);

    let search = match client.search_artist(token, artist_name).await {
        Ok(search) => search,
        Err(e) => {
            return ArtistLookup {
                resolution,
                failure: Some(format!("search request failed: {}", e)),
            };
        }
    };

    let mut failure = None;
    if search.is_error() {
        failure = Some(format!("search returned {}", search.status));
        if policy == SearchPolicy::SkipOnError {
            return ArtistLookup {
                resolution,
                failure,
            };
        }
    }

    let Some(artist_id) = search.first_id().map(String::from) else {
        return ArtistLookup {
            resolution,
            failure: failure.or_else(|| Some("no matching artist".to_string())),
        };
    };

    match client.top_tracks(token, &artist_id).await {
        Ok(tracks) => resolution.track_uris = utils::select_top_tracks(&tracks, limit),
        Err(e) => {
            failure = failure.or_else(|| Some(format!("top tracks lookup failed: {}", e)));
        }
    }
    resolution.artist_id = Some(artist_id);

    ArtistLookup {
        resolution,
        failure,
    }
}
