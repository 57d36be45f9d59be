//! Line Transformer: batches language file lines through a translator
//!
//! Lines are read in order and grouped into batches of `BATCH_SIZE`. The
//! base words of every marker in a batch go to the translator in a single
//! `translate_batch` call, the markers are rewritten with the normalized
//! results, and the batch is written and flushed before the next one is
//! read. A failed call aborts the run; batches already flushed stay on disk.

use crate::langfile::codec::{decode_cp437, encode_cp437};
use crate::langfile::normalize::normalize_translation;
use crate::langfile::token::TokenMarker;
use crate::langfile::LangFileResult;
use crate::mt::{MachineTranslator, MtResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Number of lines translated per round-trip
pub const BATCH_SIZE: usize = 10;

/// Value written when the translator returned fewer results than requested
pub const MISSING_TRANSLATION: &str = "?";

/// Counters collected over one transformation run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransformStats {
    /// Lines read (and written)
    pub lines: usize,
    /// Lines whose marker was rewritten
    pub markers: usize,
    /// `translate_batch` calls made
    pub batches: usize,
    /// Markers that received `MISSING_TRANSLATION`
    pub missing: usize,
}

enum Entry<'l> {
    Plain(&'l str),
    Marker(TokenMarker<'l>, &'l str),
}

/// Rewrites token markers in language file lines using a `MachineTranslator`
pub struct LineTransformer<'t, T: MachineTranslator + ?Sized> {
    translator: &'t T,
    source_locale: String,
    target_locale: String,
    batch_size: usize,
}

impl<'t, T: MachineTranslator + ?Sized> LineTransformer<'t, T> {
    pub fn new(translator: &'t T, source_locale: &str, target_locale: &str) -> Self {
        Self {
            translator,
            source_locale: source_locale.to_string(),
            target_locale: target_locale.to_string(),
            batch_size: BATCH_SIZE,
        }
    }

    /// Override the batch size (values below 1 are raised to 1)
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Translate one batch of decoded lines
    ///
    /// Returns exactly one output line per input line. Lines without a usable
    /// marker are returned unchanged. The translator is called once when the
    /// batch holds at least one marker and not at all otherwise.
    pub async fn translate_lines(
        &self,
        lines: &[String],
        stats: &mut TransformStats,
    ) -> MtResult<Vec<String>> {
        let entries: Vec<Entry<'_>> = lines
            .iter()
            .map(|line| match TokenMarker::parse(line) {
                Some(marker) => match marker.base_word() {
                    Some(base) => Entry::Marker(marker, base),
                    None => {
                        debug!(line = line.trim_end(), "marker key has no base word, copying line");
                        Entry::Plain(line)
                    }
                },
                None => Entry::Plain(line),
            })
            .collect();

        let words: Vec<String> = entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Marker(_, base) => Some(base.to_string()),
                Entry::Plain(_) => None,
            })
            .collect();

        let translated = if words.is_empty() {
            Vec::new()
        } else {
            stats.batches += 1;
            self.translator
                .translate_batch(&words, &self.source_locale, &self.target_locale)
                .await?
        };

        if translated.len() < words.len() {
            warn!(
                provider = self.translator.provider_name(),
                requested = words.len(),
                received = translated.len(),
                "short batch, filling remaining markers with '{}'",
                MISSING_TRANSLATION
            );
        }

        let mut results = translated.into_iter();
        let mut output = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                Entry::Plain(line) => output.push(line.to_string()),
                Entry::Marker(marker, _) => {
                    let word = results.next().unwrap_or_else(|| {
                        stats.missing += 1;
                        MISSING_TRANSLATION.to_string()
                    });
                    stats.markers += 1;
                    output.push(marker.render(&normalize_translation(&word)));
                }
            }
        }

        Ok(output)
    }

    /// Stream CP437 lines from `reader` to `writer`, one batch at a time
    ///
    /// `progress` is called with the running line count after each line is read.
    pub async fn transform<R, W, F>(
        &self,
        mut reader: R,
        mut writer: W,
        mut progress: F,
    ) -> LangFileResult<TransformStats>
    where
        R: BufRead,
        W: Write,
        F: FnMut(usize),
    {
        let mut stats = TransformStats::default();
        let mut batch: Vec<String> = Vec::with_capacity(self.batch_size);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            batch.push(decode_cp437(&buf));
            stats.lines += 1;
            progress(stats.lines);

            if batch.len() >= self.batch_size {
                self.flush_batch(&mut batch, &mut writer, &mut stats).await?;
            }
        }

        if !batch.is_empty() {
            self.flush_batch(&mut batch, &mut writer, &mut stats).await?;
        }

        debug!(?stats, "transform finished");
        Ok(stats)
    }

    /// Translate `input` into a new file at `output`
    pub async fn translate_file<F>(
        &self,
        input: &Path,
        output: &Path,
        progress: F,
    ) -> LangFileResult<TransformStats>
    where
        F: FnMut(usize),
    {
        let reader = BufReader::new(File::open(input)?);
        let writer = BufWriter::new(File::create(output)?);
        self.transform(reader, writer, progress).await
    }

    async fn flush_batch<W: Write>(
        &self,
        batch: &mut Vec<String>,
        writer: &mut W,
        stats: &mut TransformStats,
    ) -> LangFileResult<()> {
        let lines = self.translate_lines(&batch[..], stats).await?;
        for line in &lines {
            writer.write_all(&encode_cp437(line))?;
        }
        writer.flush()?;
        batch.clear();
        Ok(())
    }
}
