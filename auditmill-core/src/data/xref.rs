//! Cross-references between incidences and the questions citing them

use crate::data::models::{Chapter, Incidence, Reference};

/// Fill in the reference list of every incidence, then sort the incidence
/// set alphabetically by title for presentation.
///
/// References keep chapter index order and question declaration order.
/// Matching on the incidence id is case-insensitive.
pub fn link_incidences(chapters: &[Chapter], incidences: &mut Vec<Incidence>) {
    for incidence in incidences.iter_mut() {
        incidence.references.clear();
        for chapter in chapters {
            for question in &chapter.questions {
                if question.cites(&incidence.id) {
                    incidence.references.push(Reference {
                        chapter: chapter.id.clone(),
                        question: question.id.clone(),
                        text: question.question.clone(),
                    });
                }
            }
        }
    }

    incidences.sort_by(|a, b| a.title.cmp(&b.title));
}
