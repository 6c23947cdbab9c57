//! Page-parallel segmentation pipeline.
//!
//! Pages are independent: no run crosses a page and no page reads another's
//! state, so the pipeline fans page inputs out across worker threads and
//! reassembles the results in page-index order. Output is deterministic
//! regardless of worker count.

use std::thread;

use log::debug;

use crate::document::{ExtractedPage, PageInput};

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of worker threads; `0` selects the available parallelism of
    /// the host.
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { workers: 0 }
    }
}

impl PipelineConfig {
    /// Create a configuration with the default worker count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker count (`0` = available parallelism).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    fn effective_workers(&self, page_count: usize) -> usize {
        let workers = if self.workers == 0 {
            thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
        } else {
            self.workers
        };
        workers.min(page_count).max(1)
    }
}

/// The page segmentation pipeline: glyph pages in, run pages out.
///
/// # Examples
///
/// ```
/// use pdf_runs::{Color, Glyph, PageInput, SegmentationPipeline};
///
/// let page = PageInput::new(612.0, 792.0, vec![
///     Glyph::new("a", 12.0, "Arial", 0.0, 0.0, Color::black()),
/// ]);
///
/// let pipeline = SegmentationPipeline::new();
/// let pages = pipeline.process(vec![page]);
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].runs[0].text, "a");
/// ```
#[derive(Debug, Default)]
pub struct SegmentationPipeline {
    config: PipelineConfig,
}

impl SegmentationPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Segment all pages, returning them in page-index order.
    ///
    /// Never fails: segmentation has no error states, and a page with no
    /// glyphs simply yields no runs.
    pub fn process(&self, pages: Vec<PageInput>) -> Vec<ExtractedPage> {
        let page_count = pages.len();
        let workers = self.config.effective_workers(page_count);

        if workers <= 1 || page_count <= 1 {
            return pages
                .into_iter()
                .enumerate()
                .map(|(index, page)| ExtractedPage::from_input(index, page))
                .collect();
        }

        debug!("segmenting {} pages across {} workers", page_count, workers);

        // Contiguous chunks keep reassembly a plain concatenation in page
        // order.
        let chunk_size = page_count.div_ceil(workers);
        let mut chunks: Vec<Vec<PageInput>> = Vec::with_capacity(workers);
        let mut pages = pages.into_iter();
        loop {
            let chunk: Vec<PageInput> = pages.by_ref().take(chunk_size).collect();
            if chunk.is_empty() {
                break;
            }
            chunks.push(chunk);
        }

        let outputs: Vec<Vec<ExtractedPage>> = thread::scope(|scope| {
            let handles: Vec<_> = chunks
                .into_iter()
                .enumerate()
                .map(|(chunk_index, chunk)| {
                    scope.spawn(move || {
                        let base = chunk_index * chunk_size;
                        chunk
                            .into_iter()
                            .enumerate()
                            .map(|(offset, page)| ExtractedPage::from_input(base + offset, page))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(pages) => pages,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        outputs.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{Color, Glyph};

    fn page(label: &str) -> PageInput {
        let glyphs = label
            .chars()
            .enumerate()
            .map(|(i, c)| {
                Glyph::new(
                    c.to_string(),
                    12.0,
                    "Arial",
                    i as f32 * 6.0,
                    0.0,
                    Color::black(),
                )
            })
            .collect();
        PageInput::new(612.0, 792.0, glyphs)
    }

    fn page_texts(pages: &[ExtractedPage]) -> Vec<String> {
        pages
            .iter()
            .map(|p| p.runs.iter().map(|r| r.text.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_empty_page_set() {
        assert!(SegmentationPipeline::new().process(vec![]).is_empty());
    }

    #[test]
    fn test_sequential_path() {
        let pipeline =
            SegmentationPipeline::with_config(PipelineConfig::new().with_workers(1));
        let pages = pipeline.process(vec![page("one"), page("two")]);
        assert_eq!(page_texts(&pages), ["one", "two"]);
        assert_eq!(pages[0].index, 0);
        assert_eq!(pages[1].index, 1);
    }

    #[test]
    fn test_parallel_preserves_page_order() {
        let inputs: Vec<PageInput> = (0..17).map(|i| page(&format!("page{}", i))).collect();
        let expected: Vec<String> = (0..17).map(|i| format!("page{}", i)).collect();

        let pipeline =
            SegmentationPipeline::with_config(PipelineConfig::new().with_workers(4));
        let pages = pipeline.process(inputs);

        assert_eq!(page_texts(&pages), expected);
        let indices: Vec<usize> = pages.iter().map(|p| p.index).collect();
        assert_eq!(indices, (0..17).collect::<Vec<_>>());
    }

    #[test]
    fn test_more_workers_than_pages() {
        let pipeline =
            SegmentationPipeline::with_config(PipelineConfig::new().with_workers(8));
        let pages = pipeline.process(vec![page("a"), page("b")]);
        assert_eq!(page_texts(&pages), ["a", "b"]);
    }
}
