use rs_chatter_core::model::markov_model::MarkovModel;
use rs_chatter_core::sentence::sentencify;

/// A small corpus, blank-line-delimited paragraphs.
const CORPUS: &str = "\
The cat sat on the mat. The cat chased the dog.
The dog barked at the moon.

I'll admit the moon looked lovely that night.
The cat did not care about the moon at all.

The dog sat on the mat too, and the cat ran away.
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Order 1: each model position is a single word.
    // Higher orders window the input into n-word chunks instead.
    let mut model = MarkovModel::new(1)?;

    // Seed from any readable source; paragraphs are split on blank lines
    // and ingested one by one once the source is exhausted.
    model.seed_reader(CORPUS.as_bytes())?;
    println!("Model holds {} keys", model.len());

    // Additional units can be seeded directly at any time.
    model.seed("The moon set and the cat came home.");

    let mut rng = rand::rng();

    // The prompt is matched against the model; the best anchor is expanded
    // in both directions up to the length limit.
    let prompt = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let prompt = if prompt.is_empty() { "tell me about the cat".to_owned() } else { prompt };

    for i in 0..5 {
        let words = model.respond(&prompt, 12, &mut rng);
        println!("Response {}: {}", i + 1, sentencify(&words, &mut rng));
    }

    Ok(())
}
