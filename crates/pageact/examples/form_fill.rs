// Demonstrates auto-waiting actions against a custom backend.
//
// The in-memory "page" here pretends its form renders 300ms after load, the
// way a real page settles after a script-driven render. The session's
// actions simply retry until the elements appear; no manual waits.
//
// Run with: cargo run --example form_fill

use async_trait::async_trait;
use pageact::{
    Backend, Element, Error, FillOptions, Locator, Result, SelectOptions, Session, SessionConfig,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Default)]
struct Form {
    email: Option<String>,
    agreed: bool,
    month: Option<String>,
    submitted: bool,
}

struct DemoPage {
    rendered_at: Instant,
    form: Arc<Mutex<Form>>,
}

impl DemoPage {
    fn load() -> Self {
        Self {
            rendered_at: Instant::now() + Duration::from_millis(300),
            form: Arc::new(Mutex::new(Form::default())),
        }
    }
}

#[async_trait]
impl Backend for DemoPage {
    async fn find(&self, locator: &Locator) -> Result<Box<dyn Element>> {
        if Instant::now() < self.rendered_at {
            return Err(Error::NotFound {
                kind: locator.kind,
                value: locator.value.clone(),
            });
        }
        Ok(Box::new(DemoElement {
            locator: locator.clone(),
            form: Arc::clone(&self.form),
        }))
    }
}

struct DemoElement {
    locator: Locator,
    form: Arc<Mutex<Form>>,
}

#[async_trait]
impl Element for DemoElement {
    async fn click(&self) -> Result<()> {
        self.form.lock().unwrap().submitted = true;
        Ok(())
    }

    async fn set_value(&self, value: &str) -> Result<()> {
        self.form.lock().unwrap().email = Some(value.to_string());
        Ok(())
    }

    async fn set_checked(&self, checked: bool) -> Result<()> {
        self.form.lock().unwrap().agreed = checked;
        Ok(())
    }

    async fn select_option(&self) -> Result<()> {
        self.form.lock().unwrap().month = Some(self.locator.value.clone());
        Ok(())
    }

    async fn unselect_option(&self) -> Result<()> {
        self.form.lock().unwrap().month = None;
        Ok(())
    }

    async fn set_input_files(&self, _paths: &[PathBuf]) -> Result<()> {
        Ok(())
    }

    async fn find_within(&self, locator: &Locator) -> Result<Box<dyn Element>> {
        Ok(Box::new(DemoElement {
            locator: locator.clone(),
            form: Arc::clone(&self.form),
        }))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pageact=debug".into()),
        )
        .init();

    let page = DemoPage::load();
    let form = Arc::clone(&page.form);
    let config = SessionConfig::builder()
        .default_wait(Duration::from_secs(2))
        .build();
    let session = Session::with_config(Arc::new(page), config);

    // The form hasn't rendered yet; each action waits for its element.
    session
        .fill_in("Email", FillOptions::with_value("user@example.com"))
        .await?;
    session.check("I agree to the terms", Default::default()).await?;
    session
        .select("March", SelectOptions::builder().from("Month").build())
        .await?;
    session.click_button("Sign up", Default::default()).await?;

    println!("form after submit: {:?}", form.lock().unwrap());
    Ok(())
}
