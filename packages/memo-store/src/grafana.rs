//! Client for the Grafana annotations HTTP API.

use std::{fs, path::Path, time::Duration as StdDuration};

use reqwest::{
	Client, Identity, StatusCode, Url,
	header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use memo_domain::Memo;

use crate::{Error, Result};

const ANNOTATION_ADDED: &str = "Annotation added";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRequest {
	/// Unix time in milliseconds.
	pub time: i64,
	pub is_region: bool,
	pub tags: Vec<String>,
	pub text: String,
}
impl From<&Memo> for AnnotationRequest {
	fn from(memo: &Memo) -> Self {
		Self {
			time: memo.timestamp.unix_timestamp() * 1_000,
			is_region: false,
			tags: memo.tags.clone(),
			text: memo.description.clone(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationResponse {
	pub message: String,
	#[serde(default)]
	pub id: i64,
	#[serde(default)]
	pub end_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
	#[serde(default)]
	pub commit: String,
	#[serde(default)]
	pub database: String,
	#[serde(default)]
	pub version: String,
}

#[derive(Debug, Clone)]
pub struct Grafana {
	client: Client,
	headers: HeaderMap,
	annotations_url: Url,
	health_url: Url,
}
impl Grafana {
	pub fn new(cfg: &memo_config::Store) -> Result<Self> {
		let base = Url::parse(cfg.api_url.trim()).map_err(|err| Error::InvalidUrl {
			url: cfg.api_url.clone(),
			message: err.to_string(),
		})?;
		// PEM identities are only accepted by the rustls backend.
		let mut builder =
			Client::builder().use_rustls_tls().timeout(StdDuration::from_millis(cfg.timeout_ms));

		if let (Some(key), Some(cert)) = (cfg.tls_key.as_deref(), cfg.tls_cert.as_deref()) {
			builder = builder.identity(load_identity(Path::new(key), Path::new(cert))?);
		}

		Ok(Self {
			client: builder.build()?,
			headers: auth_headers(&cfg.api_key)?,
			annotations_url: join_path(&base, "annotations"),
			health_url: join_path(&base, "health"),
		})
	}

	pub fn annotations_url(&self) -> &Url {
		&self.annotations_url
	}

	pub fn health_url(&self) -> &Url {
		&self.health_url
	}

	pub async fn health_check(&self) -> Result<HealthResponse> {
		let res =
			self.client.get(self.health_url.clone()).headers(self.headers.clone()).send().await?;
		let (_, health) = read_json::<HealthResponse>(res).await?;

		tracing::info!(
			version = %health.version,
			database = %health.database,
			"Can talk to Grafana."
		);

		Ok(health)
	}

	pub async fn save(&self, memo: &Memo) -> Result<AnnotationResponse> {
		let body = AnnotationRequest::from(memo);
		let res = self
			.client
			.post(self.annotations_url.clone())
			.headers(self.headers.clone())
			.json(&body)
			.send()
			.await?;
		let (status, annotation) = read_json::<AnnotationResponse>(res).await?;

		if annotation.message != ANNOTATION_ADDED {
			return Err(Error::UnexpectedMessage {
				status: status.as_u16(),
				message: annotation.message,
			});
		}

		tracing::debug!(id = annotation.id, tags = ?body.tags, "Annotation saved.");

		Ok(annotation)
	}
}

pub fn auth_headers(api_key: &str) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();
	let mut value = HeaderValue::from_str(&format!("Bearer {api_key}"))?;

	value.set_sensitive(true);
	headers.insert(AUTHORIZATION, value);

	Ok(headers)
}

fn join_path(base: &Url, segment: &str) -> Url {
	let mut url = base.clone();
	let path = format!("{}/{segment}", base.path().trim_end_matches('/'));

	url.set_path(&path);

	url
}

fn load_identity(key: &Path, cert: &Path) -> Result<Identity> {
	let mut pem = read_tls(cert)?;

	pem.push(b'\n');
	pem.extend(read_tls(key)?);

	Ok(Identity::from_pem(&pem)?)
}

fn read_tls(path: &Path) -> Result<Vec<u8>> {
	fs::read(path).map_err(|source| Error::ReadTls { path: path.to_path_buf(), source })
}

async fn read_json<T>(res: reqwest::Response) -> Result<(StatusCode, T)>
where
	T: DeserializeOwned,
{
	let status = res.status();
	let body = res.text().await?;

	if status != StatusCode::OK {
		return Err(Error::UnexpectedStatus { status: status.as_u16(), body });
	}

	let value = serde_json::from_str(&body).map_err(|source| Error::Decode { body, source })?;

	Ok((status, value))
}
