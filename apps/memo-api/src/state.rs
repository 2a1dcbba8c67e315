use std::sync::Arc;

use memo_service::MemoService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<MemoService>,
}
impl AppState {
	pub fn new(config: &memo_config::Config) -> color_eyre::Result<Self> {
		let service = MemoService::new(config)?;

		Ok(Self::with_service(service))
	}

	pub fn with_service(service: MemoService) -> Self {
		Self { service: Arc::new(service) }
	}
}
