//! Inspect command implementation

use super::{build_splitter, init_logging, InputArgs, SplitterArgs};
use anyhow::{Context, Result};
use cape_splitter_engine::{GroupRef, Splitter, TextGroup};
use clap::Args;
use std::fmt::Debug;
use std::time::Instant;

const RULE: &str = "------------------------------";

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub splitter: SplitterArgs,

    /// Group to print as DOC#IDX (default: first group of the first document)
    #[arg(short, long, value_name = "DOC#IDX", value_parser = parse_group_ref)]
    pub group: Vec<GroupRef>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let mut config = self.splitter.load_config()?.splitter_config();
        self.splitter.apply(&mut config);
        let documents = self.input.load(self.quiet)?;
        let document_count = documents.len();

        let start = Instant::now();
        let splitter = build_splitter(documents, config)?;
        println!(
            "Split and tokenized all in {:.3} secs",
            start.elapsed().as_secs_f64()
        );

        for group_ref in self.selected(&splitter) {
            let group = splitter
                .group(&group_ref)
                .with_context(|| format!("Cannot inspect group {group_ref}"))?;
            print!("{}", render_group(group));
        }

        println!("total words {}", splitter.total_number_words());
        println!("total docs {}", document_count);
        println!("total groups {}", splitter.number_of_groups());
        Ok(())
    }

    fn selected(&self, splitter: &Splitter) -> Vec<GroupRef> {
        if !self.group.is_empty() {
            return self.group.clone();
        }
        splitter.iter_groups().next().map(GroupRef::from).into_iter().collect()
    }
}

/// Parse `DOC#IDX`; the document id may itself contain `#`
pub fn parse_group_ref(value: &str) -> Result<GroupRef, String> {
    let (doc_id, idx) = value
        .rsplit_once('#')
        .ok_or_else(|| format!("expected DOC#IDX, got '{value}'"))?;
    let idx = idx
        .parse()
        .map_err(|_| format!("invalid group index '{idx}'"))?;
    Ok(GroupRef::new(doc_id, idx))
}

/// Every attribute of a group, one `name : value` line each
pub fn render_group(group: &TextGroup) -> String {
    let fields: [(&str, &dyn Debug); 9] = [
        ("parent_doc_id", &group.parent_doc_id),
        ("idx", &group.idx),
        ("number_of_words", &group.number_of_words),
        ("span", &group.span),
        ("core", &group.core),
        ("sentences", &group.sentences),
        ("overlap_words_before", &group.overlap_words_before),
        ("overlap_words_after", &group.overlap_words_after),
        ("text", &group.text),
    ];

    let mut out = format!("{RULE}\n");
    for (name, value) in fields {
        out.push_str(&format!("{name} : {value:?}\n"));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cape_splitter_engine::SplitterConfig;

    #[test]
    fn test_parse_group_ref() {
        assert_eq!(parse_group_ref("doc#3").unwrap(), GroupRef::new("doc", 3));
        assert_eq!(parse_group_ref("a#b#0").unwrap(), GroupRef::new("a#b", 0));
        assert!(parse_group_ref("doc").is_err());
        assert!(parse_group_ref("doc#x").is_err());
    }

    #[test]
    fn test_render_group() {
        let splitter = Splitter::with_config(
            ["a"],
            ["One sentence. Two sentence."],
            SplitterConfig::builder().words_per_group(3).build().unwrap(),
        )
        .unwrap();
        let rendered = render_group(splitter.group(&GroupRef::new("a", 1)).unwrap());

        assert!(rendered.starts_with(RULE));
        assert!(rendered.contains("parent_doc_id : \"a\"\n"));
        assert!(rendered.contains("idx : 1\n"));
        assert!(rendered.contains("number_of_words : 2\n"));
        assert!(rendered.contains("overlap_words_before : 2\n"));
        assert!(rendered.contains("text : \"One sentence. Two sentence.\"\n"));
    }
}
