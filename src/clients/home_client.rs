use crate::home::{HomeError, PowerOff, PowerOn, Remote, SetVolume, Tune};
use crate::model::TvStatus;
use pattern_framework::InvokerClient;
use tracing::{debug, instrument};

/// Client for driving a remote through its invoker.
///
/// Every operation goes through the invoker's history, so any of them can be taken back with
/// [`HomeClient::undo`].
#[derive(Clone)]
pub struct HomeClient {
    inner: InvokerClient<Remote>,
}

impl HomeClient {
    pub fn new(inner: InvokerClient<Remote>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn power_on(&self) -> Result<(), HomeError> {
        debug!("Sending request");
        self.inner.execute(PowerOn::default()).await.map_err(HomeError::from)
    }

    #[instrument(skip(self))]
    pub async fn power_off(&self) -> Result<(), HomeError> {
        debug!("Sending request");
        self.inner.execute(PowerOff::default()).await.map_err(HomeError::from)
    }

    #[instrument(skip(self))]
    pub async fn tune(&self, channel: u32) -> Result<(), HomeError> {
        debug!("Sending request");
        self.inner.execute(Tune::new(channel)).await.map_err(HomeError::from)
    }

    #[instrument(skip(self))]
    pub async fn set_volume(&self, level: u8) -> Result<(), HomeError> {
        debug!("Sending request");
        self.inner.execute(SetVolume::new(level)).await.map_err(HomeError::from)
    }

    /// Reverts the most recent operation and returns its name.
    #[instrument(skip(self))]
    pub async fn undo(&self) -> Result<String, HomeError> {
        debug!("Sending request");
        self.inner.undo().await.map_err(HomeError::from)
    }

    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<TvStatus, HomeError> {
        debug!("Sending request");
        let remote = self.inner.snapshot().await.map_err(HomeError::from)?;
        Ok(remote.status())
    }

    /// Names of the operations that can still be undone, oldest first.
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<String>, HomeError> {
        debug!("Sending request");
        self.inner.history().await.map_err(HomeError::from)
    }
}
