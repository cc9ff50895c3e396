use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::gateway::Completion;
use crate::wire::ChatRequest;

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

/// Response half of a saved exchange.
#[derive(Serialize)]
struct ResponseRecord<'a> {
    timestamp: DateTime<Utc>,
    ok: bool,
    text: &'a str,
}

fn tx_dir(root: &Path, tx: Uuid) -> PathBuf {
    root.join(".foundry").join("tx").join(tx.to_string())
}

pub fn save_exchange(
    stage: &str,
    req: &ChatRequest,
    outcome: &Completion,
    tx: Uuid,
    root: &Path,
    save_request: bool,
    save_response: bool,
) -> anyhow::Result<SavedPaths> {
    let dir = tx_dir(root, tx);
    fs::create_dir_all(&dir)?;

    let mut request_path = None;
    let mut response_path = None;

    if save_request {
        let p = dir.join(format!("{stage}.request.json"));
        fs::write(&p, to_string_pretty(req)?)?;
        request_path = Some(p);
    }

    if save_response {
        let rendered = outcome.render();
        let record = ResponseRecord {
            timestamp: Utc::now(),
            ok: !outcome.is_failed(),
            text: &rendered,
        };
        let p = dir.join(format!("{stage}.response.json"));
        fs::write(&p, to_string_pretty(&record)?)?;
        response_path = Some(p);
    }

    Ok(SavedPaths { dir, request: request_path, response: response_path })
}

pub fn print_planned_paths(root: &Path, tx: Uuid) {
    let dir = tx_dir(root, tx);
    println!("debug: planned transcript directory: {}", dir.display());
    std::io::stdout().flush().ok();
}

pub fn print_saved_paths(stage: &str, saved: &SavedPaths) {
    println!("debug[{stage}]: transcript directory: {}", saved.dir.display());
    if let Some(p) = &saved.request {
        println!("debug[{stage}]: request saved at: {}", p.display());
    } else {
        println!("debug[{stage}]: request not saved (flag off)");
    }
    if let Some(p) = &saved.response {
        println!("debug[{stage}]: response saved at: {}", p.display());
    } else {
        println!("debug[{stage}]: response not saved (flag off)");
    }
    std::io::stdout().flush().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::Message;

    fn sample_request() -> ChatRequest {
        ChatRequest {
            model: "llama-3.1-8b-instant".into(),
            messages: vec![Message::system("s"), Message::user("u")],
        }
    }

    #[test]
    fn saves_request_and_response_under_tx_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let tx = Uuid::new_v4();
        let saved = save_exchange(
            "canvas",
            &sample_request(),
            &Completion::Reply("canvas text".into()),
            tx,
            tmp.path(),
            true,
            true,
        )
        .unwrap();

        let req = saved.request.unwrap();
        let resp = saved.response.unwrap();
        assert!(req.ends_with("canvas.request.json"));
        assert!(resp.to_string_lossy().contains(&tx.to_string()));
        assert!(saved.dir.is_dir());
        assert_eq!(req.parent(), Some(saved.dir.as_path()));

        let body = fs::read_to_string(&resp).unwrap();
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["ok"], true);
        assert_eq!(v["text"], "canvas text");
    }

    #[test]
    fn flags_off_write_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let saved = save_exchange(
            "ideas",
            &sample_request(),
            &Completion::Failed("boom".into()),
            Uuid::new_v4(),
            tmp.path(),
            false,
            false,
        )
        .unwrap();
        assert!(saved.request.is_none());
        assert!(saved.response.is_none());
    }

    #[test]
    fn failed_outcome_records_error_text() {
        let tmp = tempfile::tempdir().unwrap();
        let saved = save_exchange(
            "qa",
            &sample_request(),
            &Completion::Failed("connection refused".into()),
            Uuid::new_v4(),
            tmp.path(),
            false,
            true,
        )
        .unwrap();
        let body = fs::read_to_string(saved.response.unwrap()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["ok"], false);
        assert_eq!(v["text"], "Error: connection refused");
    }
}
