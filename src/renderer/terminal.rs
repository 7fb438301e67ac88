//! 终端渲染器
//!
//! 把回调事件输出为纯文本，供命令行程序使用。

use chrono::Local;
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::warn;

use crate::models::{HistoryEntry, ProcessingResult};
use crate::renderer::view::{HistoryRow, ResultCard};
use crate::renderer::Renderer;
use crate::workflow::{FileCtx, FilePhase};

pub struct TerminalRenderer<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn emit(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            warn!("终端输出失败: {}", e);
        }
    }
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn on_phase_change(&self, ctx: &FileCtx, phase: FilePhase) {
        self.emit(&format!("{} {}", ctx, phase.label()));
    }

    fn on_result(&self, ctx: &FileCtx, result: &ProcessingResult) {
        self.emit(&render_card(ctx, &ResultCard::from(result)));
    }

    fn on_error(&self, ctx: &FileCtx, message: &str) {
        self.emit(&format!("{} Error\n  {}", ctx, message));
    }

    fn on_history_updated(&self, entries: &[HistoryEntry]) {
        let mut text = format!("History ({})", entries.len());
        for entry in entries {
            let row = HistoryRow::new(entry, &Local);
            text.push_str(&format!(
                "\n  {:<32} {:<24} [{}]",
                row.filename, row.date, row.status
            ));
        }
        self.emit(&text);
    }
}

fn render_card(ctx: &FileCtx, card: &ResultCard) -> String {
    let mut text = format!("{} {}", ctx, card.title);
    for (label, value) in &card.fields {
        text.push_str(&format!("\n  {:<16} {}", label, value));
    }
    text.push_str(&format!("\n  {:<16} {}", "CRM Sync", card.sync.label()));
    if let Some(id) = &card.crm_contact_id {
        text.push_str(&format!("\n  {:<16} {}", "CRM Contact ID", id));
    }
    text
}
