use nearwords::{
    DictApiClient, Meaning, MeaningEntry, MeaningLookup, QueryOrchestrator, QueryResult,
    Vocabulary,
};
use std::{
    collections::HashMap,
    env,
    io::{self, Write},
    path::Path,
    time::Duration,
};

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Gateway used when definitions are not wanted; resolves nothing.
struct NoLookup;

impl MeaningLookup for NoLookup {
    fn lookup_meanings(&self, _words: &[String]) -> HashMap<String, Meaning> {
        HashMap::new()
    }
}

fn print_entry(entry: &MeaningEntry) {
    match &entry.meaning {
        Meaning::Glosses(glosses) => {
            println!("  {}", entry.word);
            for gloss in glosses {
                println!("    {}: {}", gloss.part_of_speech, gloss.definition);
            }
        }
        Meaning::NotFound => println!("  {}", entry.word),
    }
}

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let mut args = env::args().skip(1);
    let vocab_path = args.next().unwrap_or_else(|| "vocab_en.txt".into());
    let with_definitions = args.next().as_deref() == Some("--define");

    if !Path::new(&vocab_path).exists() {
        eprintln!("Vocabulary file not found: {}", vocab_path);
        std::process::exit(1);
    }

    let vocabulary = Vocabulary::from_word_list_file(&vocab_path)?;
    let orchestrator = QueryOrchestrator::new(&vocabulary);

    let lookup: Box<dyn MeaningLookup> = if with_definitions {
        match DictApiClient::new(LOOKUP_TIMEOUT) {
            Ok(client) => Box::new(client),
            Err(e) => {
                eprintln!("Could not build dictionary client ({}), running without", e);
                Box::new(NoLookup)
            }
        }
    } else {
        Box::new(NoLookup)
    };

    println!(
        "nearwords REPL - vocabulary: {} ({} words)\ntype a word, :q to quit",
        vocab_path,
        vocabulary.len()
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        if input.trim() == ":q" {
            break;
        }

        match orchestrator.query(&input, lookup.as_ref()) {
            Ok(QueryResult::Empty) => println!("Did you forget to input any word?"),
            Ok(QueryResult::TooShort) => {
                println!("Cannot check spelling for a single letter!")
            }
            Ok(QueryResult::TooLong) => println!("Word too long! You must be playing around"),
            Ok(QueryResult::ExactMatch(entry)) => {
                println!("Match found. Did you mean?");
                print_entry(&entry);
            }
            Ok(QueryResult::Suggestions(entries)) => {
                println!("Wrong spelling. Some suggestions for you:");
                for entry in &entries {
                    print_entry(entry);
                }
            }
            Err(e) => println!("No suggestions: {}", e),
        }
    }
    Ok(())
}
