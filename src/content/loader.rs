// Content loader - the pending/loaded/failed state machine for the content pane

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use super::provider::{ContentProvider, PageSource};
use super::worker::{spawn_worker, LoadCommand, LoadResult};
use super::{ContentError, OVERVIEW_PAGE};
use crate::state::ActiveChapter;

/// A successfully resolved page, tagged with the identifier it was fetched
/// under so the view can title it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedPage {
    pub section: String,
    pub page: String,
    pub source: PageSource,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet (only before the first selection).
    Idle,
    /// A resolution is in flight; the view shows a skeleton.
    Pending,
    Loaded(LoadedPage),
    Failed {
        section: String,
        page: String,
        error: ContentError,
    },
}

/// Owns the worker channels and applies results in last-requested-wins order.
/// Every `request` bumps the generation; results carrying an older generation
/// are discarded when they arrive, which gives the "stale fetch must not
/// overwrite a newer page" guarantee without real cancellation.
pub struct ContentLoader {
    state: LoadState,
    generation: u64,
    tx: Sender<LoadCommand>,
    rx: Receiver<LoadResult>,
}

impl ContentLoader {
    pub fn new(ctx: eframe::egui::Context, provider: Arc<dyn ContentProvider>) -> Self {
        let (tx, rx) = spawn_worker(ctx, provider);
        Self {
            state: LoadState::Idle,
            generation: 0,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Restarts resolution for the given chapter. A missing page key falls
    /// back to the conventional "Overview" identifier.
    pub fn request(&mut self, chapter: &ActiveChapter) {
        self.generation += 1;
        self.state = LoadState::Pending;

        let page = chapter
            .page
            .clone()
            .unwrap_or_else(|| OVERVIEW_PAGE.to_string());
        let command = LoadCommand {
            generation: self.generation,
            section: chapter.section.clone(),
            page,
        };
        if let Err(err) = self.tx.send(command) {
            log::warn!("content worker is gone: {err}");
        }
    }

    /// Drains completed resolutions. Called once per frame before rendering.
    pub fn pump(&mut self) {
        while let Ok(result) = self.rx.try_recv() {
            self.apply(result);
        }
    }

    fn apply(&mut self, result: LoadResult) {
        if result.generation != self.generation {
            log::debug!(
                "discarding stale resolution for {}/{} (generation {} < {})",
                result.section,
                result.page,
                result.generation,
                self.generation
            );
            return;
        }
        self.state = match result.result {
            Ok(source) => LoadState::Loaded(LoadedPage {
                section: result.section,
                page: result.page,
                source,
            }),
            Err(error) => LoadState::Failed {
                section: result.section,
                page: result.page,
                error,
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;
    use std::time::{Duration, Instant};

    fn test_loader() -> ContentLoader {
        let mut registry = ContentRegistry::new();
        registry.register("start", "Introduction", "# Introduction\n\nWelcome.");
        registry.register("attacker", "Pair", "# Pair\n");
        registry.register("defender", "Aligner", "# Aligner\n");
        ContentLoader::new(eframe::egui::Context::default(), Arc::new(registry))
    }

    /// Pumps until the loader leaves `Pending` or the deadline passes.
    fn pump_until_settled(loader: &mut ContentLoader) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while matches!(loader.state(), LoadState::Pending | LoadState::Idle) {
            assert!(Instant::now() < deadline, "resolution never completed");
            loader.pump();
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn starts_idle() {
        let loader = test_loader();
        assert_eq!(loader.state(), &LoadState::Idle);
    }

    #[test]
    fn default_selection_resolves_introduction() {
        let mut loader = test_loader();
        loader.request(&ActiveChapter::new("start", Some("Introduction")));
        assert_eq!(loader.state(), &LoadState::Pending);
        pump_until_settled(&mut loader);
        match loader.state() {
            LoadState::Loaded(page) => {
                assert_eq!(page.section, "start");
                assert_eq!(page.page, "Introduction");
                assert!(page.source.markdown.starts_with("# Introduction"));
            }
            other => panic!("expected loaded page, got {other:?}"),
        }
    }

    #[test]
    fn missing_page_key_falls_back_to_overview() {
        let mut loader = test_loader();
        loader.request(&ActiveChapter::new("judger", None));
        pump_until_settled(&mut loader);
        // No judger overview is registered, so the failure carries the
        // fallback identifier the loader actually resolved.
        assert_eq!(
            loader.state(),
            &LoadState::Failed {
                section: "judger".to_string(),
                page: "Overview".to_string(),
                error: ContentError::NotFound {
                    section: "judger".to_string(),
                    page: "Overview".to_string(),
                },
            }
        );
    }

    #[test]
    fn unknown_identifier_surfaces_not_found() {
        let mut loader = test_loader();
        loader.request(&ActiveChapter::new(
            "nonexistent-section",
            Some("nonexistent-page"),
        ));
        pump_until_settled(&mut loader);
        assert!(matches!(
            loader.state(),
            LoadState::Failed {
                error: ContentError::NotFound { .. },
                ..
            }
        ));
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut loader = test_loader();
        // First selection: slow-loading Pair. Grab its generation's result
        // shape by hand instead of racing the worker.
        loader.request(&ActiveChapter::new("attacker", Some("Pair")));
        let stale_generation = loader.generation;
        loader.request(&ActiveChapter::new("defender", Some("Aligner")));

        // The newer request resolves first.
        loader.apply(LoadResult {
            generation: loader.generation,
            section: "defender".to_string(),
            page: "Aligner".to_string(),
            result: Ok(PageSource::new("# Aligner\n")),
        });
        // The older fetch completes afterwards and must not win.
        loader.apply(LoadResult {
            generation: stale_generation,
            section: "attacker".to_string(),
            page: "Pair".to_string(),
            result: Ok(PageSource::new("# Pair\n")),
        });

        match loader.state() {
            LoadState::Loaded(page) => assert_eq!(page.page, "Aligner"),
            other => panic!("expected Aligner to stay loaded, got {other:?}"),
        }
    }

    #[test]
    fn stale_failure_does_not_clobber_loaded_page() {
        let mut loader = test_loader();
        loader.request(&ActiveChapter::new("start", Some("QuickStart")));
        let stale_generation = loader.generation;
        loader.request(&ActiveChapter::new("attacker", Some("Pair")));
        loader.apply(LoadResult {
            generation: loader.generation,
            section: "attacker".to_string(),
            page: "Pair".to_string(),
            result: Ok(PageSource::new("# Pair\n")),
        });
        loader.apply(LoadResult {
            generation: stale_generation,
            section: "start".to_string(),
            page: "QuickStart".to_string(),
            result: Err(ContentError::NotFound {
                section: "start".to_string(),
                page: "QuickStart".to_string(),
            }),
        });
        assert!(matches!(loader.state(), LoadState::Loaded(_)));
    }

    #[test]
    fn rapid_reselection_ends_on_the_last_request() {
        let mut loader = test_loader();
        loader.request(&ActiveChapter::new("attacker", Some("Pair")));
        loader.request(&ActiveChapter::new("defender", Some("Aligner")));
        pump_until_settled(&mut loader);
        // Both results eventually arrive; only Aligner's generation matches.
        loader.pump();
        match loader.state() {
            LoadState::Loaded(page) => assert_eq!(page.page, "Aligner"),
            other => panic!("expected Aligner, got {other:?}"),
        }
    }
}
