// Shared scripted backend for integration tests
//
// FakeBackend implements the Backend/Element contracts against in-memory
// state, with a small script controlling how lookups and mutations fail so
// tests can exercise the retry loop without a browser.

use async_trait::async_trait;
use pageact::{Backend, Element, Error, Locator, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Mutations recorded against the page.
#[derive(Debug, Default)]
pub struct PageState {
    pub checked: Mutex<Option<bool>>,
    pub value: Mutex<Option<String>>,
    pub selected: Mutex<Vec<String>>,
    pub unselected: Mutex<Vec<String>>,
    pub files: Mutex<Vec<PathBuf>>,
    pub clicks: AtomicU32,
}

pub struct FakeBackend {
    /// Lookups left that fail with NotFound (u32::MAX = never found)
    not_found_left: AtomicU32,
    /// Every lookup fails with InvalidLocator
    malformed: bool,
    /// Mutations left that fail with Stale
    stale_left: Arc<AtomicU32>,
    pub finds: Mutex<Vec<Locator>>,
    pub finds_within: Arc<Mutex<Vec<Locator>>>,
    pub state: Arc<PageState>,
}

impl FakeBackend {
    fn with_script(not_found_left: u32, malformed: bool, stale_left: u32) -> Arc<Self> {
        Arc::new(Self {
            not_found_left: AtomicU32::new(not_found_left),
            malformed,
            stale_left: Arc::new(AtomicU32::new(stale_left)),
            finds: Mutex::new(Vec::new()),
            finds_within: Arc::new(Mutex::new(Vec::new())),
            state: Arc::new(PageState::default()),
        })
    }

    /// Every lookup succeeds, every mutation succeeds
    pub fn found() -> Arc<Self> {
        Self::with_script(0, false, 0)
    }

    /// The first `n` lookups fail with NotFound, then lookups succeed
    pub fn not_found_times(n: u32) -> Arc<Self> {
        Self::with_script(n, false, 0)
    }

    /// Every lookup fails with NotFound
    pub fn never_found() -> Arc<Self> {
        Self::with_script(u32::MAX, false, 0)
    }

    /// Every lookup fails with InvalidLocator (fatal)
    pub fn malformed() -> Arc<Self> {
        Self::with_script(0, true, 0)
    }

    /// Lookups succeed, but the first `n` mutations fail with Stale
    pub fn stale_times(n: u32) -> Arc<Self> {
        Self::with_script(0, false, n)
    }

    pub fn find_count(&self) -> usize {
        self.finds.lock().unwrap().len()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn find(&self, locator: &Locator) -> Result<Box<dyn Element>> {
        self.finds.lock().unwrap().push(locator.clone());

        if self.malformed {
            return Err(Error::InvalidLocator(format!(
                "unparseable locator for {locator}"
            )));
        }
        let left = self.not_found_left.load(Ordering::SeqCst);
        if left > 0 {
            if left != u32::MAX {
                self.not_found_left.store(left - 1, Ordering::SeqCst);
            }
            return Err(Error::NotFound {
                kind: locator.kind,
                value: locator.value.clone(),
            });
        }

        Ok(Box::new(FakeElement {
            locator: locator.clone(),
            stale_left: Arc::clone(&self.stale_left),
            finds_within: Arc::clone(&self.finds_within),
            state: Arc::clone(&self.state),
        }))
    }
}

pub struct FakeElement {
    locator: Locator,
    stale_left: Arc<AtomicU32>,
    finds_within: Arc<Mutex<Vec<Locator>>>,
    state: Arc<PageState>,
}

impl FakeElement {
    fn check_stale(&self) -> Result<()> {
        let left = self.stale_left.load(Ordering::SeqCst);
        if left > 0 {
            self.stale_left.store(left - 1, Ordering::SeqCst);
            return Err(Error::Stale);
        }
        Ok(())
    }
}

#[async_trait]
impl Element for FakeElement {
    async fn click(&self) -> Result<()> {
        self.check_stale()?;
        self.state.clicks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn set_value(&self, value: &str) -> Result<()> {
        self.check_stale()?;
        *self.state.value.lock().unwrap() = Some(value.to_string());
        Ok(())
    }

    async fn set_checked(&self, checked: bool) -> Result<()> {
        self.check_stale()?;
        *self.state.checked.lock().unwrap() = Some(checked);
        Ok(())
    }

    async fn select_option(&self) -> Result<()> {
        self.check_stale()?;
        self.state
            .selected
            .lock()
            .unwrap()
            .push(self.locator.value.clone());
        Ok(())
    }

    async fn unselect_option(&self) -> Result<()> {
        self.check_stale()?;
        self.state
            .unselected
            .lock()
            .unwrap()
            .push(self.locator.value.clone());
        Ok(())
    }

    async fn set_input_files(&self, paths: &[PathBuf]) -> Result<()> {
        self.check_stale()?;
        *self.state.files.lock().unwrap() = paths.to_vec();
        Ok(())
    }

    async fn find_within(&self, locator: &Locator) -> Result<Box<dyn Element>> {
        self.finds_within.lock().unwrap().push(locator.clone());
        Ok(Box::new(FakeElement {
            locator: locator.clone(),
            stale_left: Arc::clone(&self.stale_left),
            finds_within: Arc::clone(&self.finds_within),
            state: Arc::clone(&self.state),
        }))
    }
}
