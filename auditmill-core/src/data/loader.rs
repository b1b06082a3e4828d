//! YAML document loading
//!
//! Chapters and incidences are ordered mappings in the source documents, so
//! loading goes through `serde_yaml::Mapping` (which keeps document order)
//! and into `Vec`-backed models instead of maps.

use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::data::models::{Chapter, ChapterMeta, Incidence, Question};
use crate::{Error, Result};

/// Load the chapter id list from `index.yaml`
pub fn load_index(data_dir: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(data_dir.join("index.yaml"))?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load every chapter named by `index.yaml`, in index order
pub fn load_chapters(data_dir: &Path) -> Result<Vec<Chapter>> {
    load_index(data_dir)?
        .iter()
        .map(|id| load_chapter(data_dir, id))
        .collect()
}

/// Load a single chapter document from `<data_dir>/<chapter_id>.yaml`
pub fn load_chapter(data_dir: &Path, chapter_id: &str) -> Result<Chapter> {
    let path = data_dir.join(format!("{chapter_id}.yaml"));
    debug!(chapter = chapter_id, path = %path.display(), "loading chapter");
    let content = std::fs::read_to_string(&path)?;
    parse_chapter(chapter_id, &content)
}

/// Parse a chapter document from a YAML string
pub fn parse_chapter(chapter_id: &str, content: &str) -> Result<Chapter> {
    let doc: Value = serde_yaml::from_str(content)?;
    let map = doc
        .as_mapping()
        .ok_or_else(|| Error::Data(format!("chapter '{chapter_id}' is not a mapping")))?;

    let meta = map
        .get("meta")
        .ok_or_else(|| Error::Data(format!("chapter '{chapter_id}' has no meta section")))?;
    let meta: ChapterMeta = serde_yaml::from_value(meta.clone())
        .map_err(|e| Error::Data(format!("bad meta section in chapter '{chapter_id}': {e}")))?;

    let questions = map
        .get("questions")
        .and_then(Value::as_mapping)
        .ok_or_else(|| Error::Data(format!("chapter '{chapter_id}' has no questions mapping")))?;

    let mut parsed = Vec::with_capacity(questions.len());
    let mut previous: Option<String> = None;
    for (key, value) in questions {
        let id = key.as_str().ok_or_else(|| {
            Error::Data(format!("non-string question key in chapter '{chapter_id}'"))
        })?;
        parsed.push(parse_question(id, value, previous.as_deref())?);
        previous = Some(id.to_string());
    }

    Ok(Chapter {
        id: chapter_id.to_string(),
        meta,
        questions: parsed,
    })
}

fn parse_question(id: &str, value: &Value, previous: Option<&str>) -> Result<Question> {
    // A question that is not a mapping is usually a missed indent right
    // after the previous question, so name both in the error.
    let map = value.as_mapping().ok_or_else(|| {
        Error::Data(format!(
            "bad question data: {}, previous: {}",
            id,
            previous.unwrap_or("none")
        ))
    })?;

    let question = string_field(map, "question")
        .ok_or_else(|| Error::Data(format!("question missing its text: {id}")))?;

    let incidences = match map.get("incidences") {
        None => Vec::new(),
        Some(value) => incidence_ids(id, value)?,
    };

    let links = map
        .get("links")
        .and_then(Value::as_sequence)
        .map(|seq| {
            seq.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    Ok(Question {
        id: id.to_string(),
        question,
        rationale: string_field(map, "rationale"),
        answer: string_field(map, "answer").unwrap_or_else(|| "default".to_string()),
        applies: string_field(map, "applies").unwrap_or_else(|| "everyone".to_string()),
        incidences,
        links,
    })
}

fn incidence_ids(question_id: &str, value: &Value) -> Result<Vec<String>> {
    let seq = value
        .as_sequence()
        .ok_or_else(|| Error::Data(format!("bad incidence list for question: {question_id}")))?;
    seq.iter()
        .map(|entry| {
            entry.as_str().map(str::to_owned).ok_or_else(|| {
                Error::Data(format!("bad incidence list for question: {question_id}"))
            })
        })
        .collect()
}

fn string_field(map: &Mapping, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Load the incidence records from `incidences.yaml`, in document order
pub fn load_incidences(data_dir: &Path) -> Result<Vec<Incidence>> {
    let content = std::fs::read_to_string(data_dir.join("incidences.yaml"))?;
    parse_incidences(&content)
}

/// Parse the incidence document from a YAML string
pub fn parse_incidences(content: &str) -> Result<Vec<Incidence>> {
    let doc: Value = serde_yaml::from_str(content)?;
    let map = doc
        .as_mapping()
        .ok_or_else(|| Error::Data("incidence document is not a mapping".to_string()))?;

    let mut incidences = Vec::with_capacity(map.len());
    for (key, value) in map {
        let id = key
            .as_str()
            .ok_or_else(|| Error::Data("non-string incidence key".to_string()))?;
        let mut incidence: Incidence = serde_yaml::from_value(value.clone())
            .map_err(|e| Error::Data(format!("bad incidence record '{id}': {e}")))?;
        incidence.id = id.to_string();
        incidences.push(incidence);
    }
    Ok(incidences)
}
