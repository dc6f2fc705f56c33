use codeblanks::config::Config;
use codeblanks::errors::ErrorResponse;
use codeblanks::models::dto::TopicQuestionRequest;
use codeblanks::services::{QuestionService, TemplateCodeSource};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::from_env();
    let args: Vec<String> = std::env::args().collect();
    let topic = args.get(1).cloned().unwrap_or_else(|| "L2_03".to_string());
    let num_blanks = args
        .get(2)
        .and_then(|v| v.parse().ok())
        .unwrap_or(config.default_num_blanks)
        .min(config.max_num_blanks);

    let service = QuestionService::from_config(&config).expect("failed to build question service");
    let source = TemplateCodeSource::from_config(&config).expect("failed to load code templates");

    log::info!("generating question for topic {} ({} blanks)", topic, num_blanks);

    let request = TopicQuestionRequest { topic, num_blanks };
    match service.generate_from_source(&source, &request).await {
        Ok(question) => {
            let json = serde_json::to_string_pretty(&question)
                .expect("question serializes to JSON");
            println!("{}", json);
        }
        Err(err) => {
            let response = ErrorResponse::from(&err);
            let json = serde_json::to_string(&response).expect("error serializes to JSON");
            eprintln!("{}", json);
            if err.is_recoverable() {
                log::warn!("recoverable failure, retry with another topic or code sample");
                std::process::exit(1);
            }
            std::process::exit(2);
        }
    }
}
