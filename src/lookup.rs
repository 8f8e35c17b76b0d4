use std::collections::{HashMap, HashSet};
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct GlossEntry {
    pub part_of_speech: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Meaning {
    Glosses(Vec<GlossEntry>),
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeaningEntry {
    pub word: String,
    pub meaning: Meaning,
}

/// Definition lookup boundary. Implementations absorb their own transport
/// failures: a word that cannot be resolved maps to `Meaning::NotFound`,
/// never to an error that would sink the whole query.
pub trait MeaningLookup {
    fn lookup_meanings(&self, words: &[String]) -> HashMap<String, Meaning>;
}

#[derive(Debug, Deserialize)]
struct ApiEntry {
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiMeaning {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
}

// Only the first definition per part-of-speech survives; repeats of a
// part-of-speech label are dropped.
fn glosses_from_entries(entries: Vec<ApiEntry>) -> Meaning {
    let mut seen_pos = HashSet::new();
    let mut glosses = Vec::new();
    for entry in entries {
        for meaning in entry.meanings {
            if seen_pos.contains(&meaning.part_of_speech) {
                continue;
            }
            if let Some(first) = meaning.definitions.into_iter().next() {
                seen_pos.insert(meaning.part_of_speech.clone());
                glosses.push(GlossEntry {
                    part_of_speech: meaning.part_of_speech,
                    definition: first.definition,
                });
            }
        }
    }
    if glosses.is_empty() {
        Meaning::NotFound
    } else {
        Meaning::Glosses(glosses)
    }
}

/// Client for a dictionaryapi.dev-style endpoint: `GET {base}/{word}` returns
/// a JSON array of entries, each with part-of-speech-tagged definitions.
pub struct DictApiClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

impl DictApiClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(DictApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn fetch(&self, word: &str) -> Result<Meaning, reqwest::Error> {
        let url = format!("{}/{}", self.base_url, word);
        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            // the API answers 404 for unknown words
            return Ok(Meaning::NotFound);
        }
        let entries: Vec<ApiEntry> = response.json()?;
        Ok(glosses_from_entries(entries))
    }
}

impl MeaningLookup for DictApiClient {
    fn lookup_meanings(&self, words: &[String]) -> HashMap<String, Meaning> {
        words
            .iter()
            .map(|word| {
                let meaning = match self.fetch(word) {
                    Ok(meaning) => meaning,
                    Err(e) => {
                        log::warn!("meaning lookup failed for '{}': {}", word, e);
                        Meaning::NotFound
                    }
                };
                (word.clone(), meaning)
            })
            .collect()
    }
}
