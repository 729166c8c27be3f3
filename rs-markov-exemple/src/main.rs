use rs_markov_core::config::ModelConfig;
use rs_markov_core::error::ModelError;
use rs_markov_core::model::trainer::train_file;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use RUST_LOG=debug to see training and generation details
    env_logger::init();

    // Window length is the number of characters used as context.
    // A fixed seed makes every run produce the same text
    let config = ModelConfig {
        window_length: 7,
        seed: Some(20),
    };
    let mut model = config.build_model()?;

    // The corpus is read as a single stream, line endings included
    let summary = train_file(&mut model, "./data/corpus.txt")?;
    println!(
        "Trained on {} characters ({} distinct windows)",
        summary.characters, summary.windows
    );

    // Training without enough data is reported instead of building an empty model
    let mut tiny = ModelConfig { window_length: 5, seed: None }.build_model()?;
    match rs_markov_core::model::trainer::train(&mut tiny, "abc".chars()) {
        Ok(_) => println!("Should not happen"),
        Err(ModelError::InsufficientData { required, available }) => {
            println!("Corpus too short: {available} characters, {required} needed")
        }
        Err(e) => return Err(e.into()),
    }

    // Generated text starts with the seed and stops early on an unseen context
    let mut generator = config.generator(&model);
    for seed_text in ["The quick", "Once upon a time", "ab"] {
        println!("----\n{}", generator.generate(seed_text, 300)?);
    }

    Ok(())
}
