//! Getting dataset text into the page: a same-origin fetch, or a file the
//! user picked. Both parse fully before returning.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Response};

use crate::grid::{Dataset, DatasetError};

/// Best readable description of a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
	value
		.as_string()
		.or_else(|| {
			value
				.dyn_ref::<js_sys::Error>()
				.map(|e| String::from(e.message()))
		})
		.unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(url: &str, message: impl Into<String>) -> DatasetError {
	DatasetError::Network {
		url: url.to_string(),
		message: message.into(),
	}
}

pub async fn fetch_dataset(url: &str) -> Result<Dataset, DatasetError> {
	let window = web_sys::window().ok_or_else(|| network_error(url, "no window"))?;
	let resp_value = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|e| network_error(url, js_message(&e)))?;
	let resp: Response = resp_value
		.dyn_into()
		.map_err(|e| network_error(url, js_message(&e)))?;
	if !resp.ok() {
		return Err(DatasetError::Fetch {
			url: url.to_string(),
			status: resp.status(),
			status_text: resp.status_text(),
		});
	}

	let text_promise = resp.text().map_err(|e| network_error(url, js_message(&e)))?;
	let text = JsFuture::from(text_promise)
		.await
		.map_err(|e| network_error(url, js_message(&e)))?
		.as_string()
		.ok_or_else(|| network_error(url, "response body is not text"))?;
	Dataset::parse(&text)
}

pub async fn read_dataset_file(file: &File) -> Result<Dataset, DatasetError> {
	let name = file.name();
	let read_error = |message: String| DatasetError::FileRead {
		name: name.clone(),
		message,
	};
	let text = JsFuture::from(file.text())
		.await
		.map_err(|e| read_error(js_message(&e)))?
		.as_string()
		.ok_or_else(|| read_error("file is not text".into()))?;
	Dataset::parse(&text)
}
