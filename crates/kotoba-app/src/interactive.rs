use std::fmt::Write as _;
use std::io::Write;
use std::sync::{Arc, Mutex};

use kotoba_core::links::jisho_search_link;
use kotoba_types::{LookupSlot, SearchResults, SessionEvent, SessionUpdate, SuggestionItem};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::state::AppState;

const HELP: &str = "\
Type to get suggestions. Commands:
  /search <query>   run a full search
  /word <word>      pivot to a related word
  /kanji <part>     pivot to part of a kanji annotation
  /pick <n>         pivot to suggestion n
  /drag <text>      quick lookup of selected text
  /quit";

const MAX_EXAMPLES: usize = 3;

/// One stdin line
#[derive(Debug)]
pub(crate) enum Command {
    Events(Vec<SessionEvent>),
    Pick(usize),
    Quit,
    Unknown(String),
}

pub(crate) fn parse_line(line: &str) -> Command {
    let Some(command) = line.strip_prefix('/') else {
        return Command::Events(vec![SessionEvent::InputChanged(line.to_string())]);
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim().to_string()))
        .unwrap_or((command, String::new()));

    match name {
        "quit" | "q" => Command::Quit,
        "search" => Command::Events(vec![
            SessionEvent::InputChanged(arg),
            SessionEvent::Submit,
        ]),
        "word" => Command::Events(vec![SessionEvent::RelatedWordClicked(arg)]),
        "kanji" => Command::Events(vec![SessionEvent::KanjiPartClicked(arg)]),
        "drag" => Command::Events(vec![SessionEvent::TextDragged(arg)]),
        "pick" => match arg.parse() {
            Ok(n) => Command::Pick(n),
            Err(_) => Command::Unknown(line.to_string()),
        },
        _ => Command::Unknown(line.to_string()),
    }
}

/// Drive a search session from stdin until `/quit` or EOF
pub async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    drive(state, BufReader::new(tokio::io::stdin()), std::io::stdout()).await
}

fn say<W: Write>(out: &Mutex<W>, text: &str) {
    if let Ok(mut out) = out.lock() {
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

/// Feed `input` lines to a session and write every update to `out`.
///
/// Returns once the session has stopped and all of its updates were written.
pub(crate) async fn drive<R, W>(state: Arc<AppState>, input: R, out: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let (session, handle, updates) = state.session();
    let session_task = tokio::spawn(session.run());

    let out = Arc::new(Mutex::new(out));
    let suggestions: Arc<Mutex<Vec<SuggestionItem>>> = Arc::default();
    let max_words = state.config.search.max_display_words;
    let printer = {
        let suggestions = Arc::clone(&suggestions);
        let out = Arc::clone(&out);
        tokio::spawn(async move {
            // ends once the session drops its sender and the queue is empty
            while let Ok(update) = updates.recv().await {
                if let SessionUpdate::Suggestions { items, .. } = &update {
                    if let Ok(mut last) = suggestions.lock() {
                        *last = items.clone();
                    }
                }
                say(&out, &render_update(&update, max_words));
            }
        })
    };

    say(&out, &format!("{HELP}\n"));
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Command::Quit => break,
            Command::Events(events) => {
                for event in events {
                    handle.send(event).await?;
                }
            }
            Command::Pick(n) => {
                let picked = suggestions
                    .lock()
                    .ok()
                    .and_then(|items| items.get(n.wrapping_sub(1)).cloned());
                match picked {
                    Some(item) => handle.send(SessionEvent::SuggestionClicked(item)).await?,
                    None => say(&out, &format!("No suggestion #{n}\n")),
                }
            }
            Command::Unknown(line) => say(&out, &format!("Unknown command: {line}\n{HELP}\n")),
        }
    }

    handle.send(SessionEvent::Shutdown).await?;
    session_task.await??;
    printer.await?;
    Ok(())
}

pub(crate) fn render_update(update: &SessionUpdate, max_words: usize) -> String {
    let mut out = String::new();
    match update {
        SessionUpdate::Suggestions { items, .. } => {
            for (i, item) in items.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}. {} ({}) - {}",
                    i + 1,
                    item.word,
                    item.reading,
                    item.meaning
                );
            }
        }
        SessionUpdate::SearchStarted { query } => {
            let _ = writeln!(out, "Searching 「{query}」...");
        }
        SessionUpdate::SearchSettled(results) => out.push_str(&render_results(results, max_words)),
        SessionUpdate::DragResult { text, response } => {
            let _ = writeln!(out, "[{text}]");
            if response.items.is_empty() {
                out.push_str("  No results found\n");
            }
            for item in &response.items {
                match &item.sub_entry {
                    Some(sub) => {
                        let _ = writeln!(out, "  {} ({sub})", item.entry);
                    }
                    None => {
                        let _ = writeln!(out, "  {}", item.entry);
                    }
                }
                for pos in &item.pos {
                    let _ = writeln!(out, "    {}", pos.kind);
                    for (i, meaning) in pos.meanings.iter().enumerate() {
                        let _ = writeln!(out, "      {}. {}", i + 1, meaning.meaning);
                    }
                }
            }
        }
    }
    out
}

/// Empty-state line that tells a failed lookup apart from an empty one
fn empty_state(results: &SearchResults, slot: LookupSlot) -> &'static str {
    if results.failed(slot) {
        "  Lookup failed\n"
    } else {
        "  No results found\n"
    }
}

pub(crate) fn render_results(results: &SearchResults, max_words: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", results.query);

    out.push_str("[Dictionary]\n");
    match &results.dictionary_result {
        Some(dictionary) => {
            let words = dictionary.display_words(max_words);
            if words.is_empty() {
                out.push_str("  No results found\n");
            }
            for word in words {
                let _ = write!(out, "  {}", word.word);
                if !word.word_with_kanji.is_empty() {
                    let _ = write!(out, " ({})", word.kanji_parts().join(" · "));
                }
                out.push('\n');
                for meaning in &word.meanings {
                    let _ = writeln!(out, "    - {meaning}");
                }
            }
            let _ = writeln!(out, "  {}", dictionary.dictionary_link);
        }
        None => out.push_str(empty_state(results, LookupSlot::Dictionary)),
    }

    out.push_str("[Examples]\n");
    match results.example_result.as_ref().filter(|e| !e.results.is_empty()) {
        Some(examples) => {
            for example in examples.results.iter().take(MAX_EXAMPLES) {
                let _ = writeln!(out, "  {} / {}", example.kanji, example.english);
            }
        }
        None => out.push_str(empty_state(results, LookupSlot::Examples)),
    }

    out.push_str("[Words]\n");
    match results.phrase_result.as_ref().filter(|p| !p.data.is_empty()) {
        Some(phrase) => {
            for entry in &phrase.data {
                let Some(japanese) = entry.japanese.first() else {
                    continue;
                };
                let word = japanese.word.as_deref().or(japanese.reading.as_deref());
                let _ = write!(out, "  {}", word.unwrap_or_default());
                if let (Some(_), Some(reading)) = (&japanese.word, &japanese.reading) {
                    let _ = write!(out, " ({reading})");
                }
                let senses: Vec<String> = entry
                    .displayed_senses()
                    .iter()
                    .map(|sense| sense.english_definitions.join(", "))
                    .collect();
                if !senses.is_empty() {
                    let _ = write!(out, ": {}", senses.join("; "));
                }
                out.push('\n');
            }
            let _ = writeln!(out, "  {}", jisho_search_link(&results.query));
        }
        None => out.push_str(empty_state(results, LookupSlot::Phrase)),
    }

    if !results.kanji_results.is_empty() || results.failed(LookupSlot::Kanji) {
        out.push_str("[Kanji]\n");
    }
    for (kanji, result) in &results.kanji_results {
        let details = &result.details;
        if !details.found {
            let _ = writeln!(out, "  {kanji}: not found");
            continue;
        }
        let _ = write!(out, "  {kanji}: {}", details.meaning.as_deref().unwrap_or_default());
        if let Some(kun) = details.kunyomi.as_ref().filter(|r| !r.is_empty()) {
            let _ = write!(out, " | kun: {}", kun.join(", "));
        }
        if let Some(on) = details.onyomi.as_ref().filter(|r| !r.is_empty()) {
            let _ = write!(out, " | on: {}", on.join(", "));
        }
        let _ = writeln!(out, "\n    {}", result.dictionary_link);
    }
    for failure in results.failures.iter().filter(|f| f.slot == LookupSlot::Kanji) {
        let _ = writeln!(
            out,
            "  {}: lookup failed",
            failure.character.as_deref().unwrap_or("?")
        );
    }

    out
}
