use std::path::Path;
use std::sync::RwLock;

use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use rs_markov_core::config::ModelConfig;
use rs_markov_core::error::ModelError;
use rs_markov_core::io::{get_filename, list_files};
use rs_markov_core::model::markov_model::MarkovModel;
use rs_markov_core::model::trainer::train_file;

const DATA_FOLDER: &str = "./data";
const CORPUS_EXTENSION: &str = "txt";
/// Upper bound on `length` for one `/v1/generate` call, the read lock is held while generating
const MAX_GENERATED_LENGTH: usize = 10_000;

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	text: Option<String>,
	length: Option<usize>,
	seed: Option<u64>
}

/// Corpus selection for `/v1/train`, the model parameters come as a `ModelConfig`
#[derive(Deserialize)]
struct CorpusQuery {
	name: Option<String>
}

#[derive(Deserialize)]
struct WindowQuery {
	window: Option<String>
}

/// Model shared between requests.
///
/// Training swaps a new model in under the write lock, generation only
/// needs the read lock.
struct SharedData {
	model: Option<MarkovModel>,
	corpus: Option<String>
}

/// Maps a core error to an HTTP response.
fn error_response(error: &ModelError) -> HttpResponse {
	match error {
		ModelError::InsufficientData { .. }
		| ModelError::InvalidWindowLength(_)
		| ModelError::WindowLengthMismatch { .. } => HttpResponse::BadRequest().body(error.to_string()),
		ModelError::NotFinalized => HttpResponse::Conflict().body(error.to_string()),
		ModelError::Io(_) => HttpResponse::InternalServerError().body(error.to_string()),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Continues `text` with up to `length` characters from the trained model,
/// capped at `MAX_GENERATED_LENGTH`. A `seed` makes the output reproducible.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<RwLock<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let shared_data = match data.read() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	let model = match &shared_data.model {
		Some(model) => model,
		None => return HttpResponse::Conflict().body("No model trained"),
	};

	let config = ModelConfig { window_length: model.window_length(), seed: query.seed };
	let text = query.text.as_deref().unwrap_or("");
	let length = query.length.unwrap_or(200).min(MAX_GENERATED_LENGTH);

	match config.generator(model).generate(text, length) {
		Ok(result) => HttpResponse::Ok().body(result),
		Err(e) => error_response(&e),
	}
}

#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	let files = match list_files(DATA_FOLDER, CORPUS_EXTENSION) {
		Ok(files) => files,
		Err(_) => return HttpResponse::InternalServerError().body("Failed to list corpora"),
	};
	let names: Vec<String> = files.iter().filter_map(|file| get_filename(file).ok()).collect();
	HttpResponse::Ok().body(names.join("\n"))
}

#[get("/v1/model")]
async fn get_model(data: web::Data<RwLock<SharedData>>) -> impl Responder {
	let shared_data = match data.read() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match (&shared_data.model, &shared_data.corpus) {
		(Some(model), Some(corpus)) => {
			HttpResponse::Ok().body(format!("# {} (window {})\n{}", corpus, model.window_length(), model))
		}
		_ => HttpResponse::Conflict().body("No model trained"),
	}
}

#[get("/v1/distribution")]
async fn get_distribution(data: web::Data<RwLock<SharedData>>, query: web::Query<WindowQuery>) -> impl Responder {
	let shared_data = match data.read() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	let model = match &shared_data.model {
		Some(model) => model,
		None => return HttpResponse::Conflict().body("No model trained"),
	};

	let window: Vec<char> = query.window.as_deref().unwrap_or("").chars().collect();
	match model.distribution(&window) {
		Some(distribution) => HttpResponse::Ok().json(distribution.entries()),
		None => HttpResponse::NotFound().body("Unknown window"),
	}
}

#[put("/v1/train")]
async fn put_train(
	data: web::Data<RwLock<SharedData>>,
	corpus: web::Query<CorpusQuery>,
	config: web::Query<ModelConfig>,
) -> impl Responder {
	let name = match &corpus.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};
	if name.contains(['/', '\\']) || name.contains("..") {
		return HttpResponse::BadRequest().body("Invalid corpus name");
	}

	// Train outside the lock, readers keep the previous model meanwhile
	let mut model = match config.build_model() {
		Ok(model) => model,
		Err(e) => return error_response(&e),
	};
	let corpus_path = Path::new(DATA_FOLDER).join(format!("{name}.{CORPUS_EXTENSION}"));
	let summary = match train_file(&mut model, &corpus_path) {
		Ok(summary) => summary,
		Err(e) => {
			log::warn!("training on {} failed: {}", corpus_path.display(), e);
			return error_response(&e);
		}
	};

	let mut shared_data = match data.write() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	shared_data.model = Some(model);
	shared_data.corpus = Some(name.to_owned());

	HttpResponse::Ok().body(format!(
		"Model trained on {}: {} characters, {} windows",
		name, summary.characters, summary.windows
	))
}

/// Main entry point for the server.
///
/// Holds one model in a `RwLock` and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Corpora are `.txt` files in `./data`.
/// - Logging is configured with `RUST_LOG`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		model: None,
		corpus: None,
	};
	let shared_model = web::Data::new(RwLock::new(shared_data));

	log::info!("listening on 127.0.0.1:5000");
	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(get_model)
			.service(get_distribution)
			.service(put_train)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
