use super::Command;
use crate::application::{ApplicationForm, SUBMIT_FAILED};
use crate::config::Config;
use crate::error::{Result, error};
use tracing::{info, warn};

pub struct ApplyCommand {
    config: Config,
    form: ApplicationForm,
    client: reqwest::Client,
}

impl ApplyCommand {
    pub fn new(config: Config, form: ApplicationForm) -> Self {
        Self {
            config,
            form,
            client: reqwest::Client::new(),
        }
    }

    #[cfg(test)]
    fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait::async_trait]
impl Command for ApplyCommand {
    async fn execute(&self) -> Result<()> {
        let application = match self.form.validate(&self.config.time_zone) {
            Ok(application) => application,
            Err(e) => {
                eprintln!("{}", e);
                return Err(error!("application rejected: {:?}", e));
            }
        };

        match self.config.apply_endpoint()? {
            Some(endpoint) => {
                if let Err(e) = application.submit(&self.client, &endpoint).await {
                    warn!("submission to {} failed: {}", endpoint, e);
                    eprintln!("{}", SUBMIT_FAILED);
                    return Err(error!("application not sent: {}", e));
                }
                info!("application for {:?} sent to {}", application.vacante, endpoint);
            }
            None => {
                info!("simulated application submission for {:?}", application.vacante);
                println!("{}", serde_json::to_string_pretty(&application)?);
            }
        }
        println!("¡Gracias! Hemos recibido tu postulación.");
        Ok(())
    }
}
