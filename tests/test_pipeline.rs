//! Integration tests for the page-parallel pipeline.

use pdf_runs::{
    Color, DocumentMetadata, ExtractedDocument, Glyph, PageInput, PipelineConfig,
    SegmentationPipeline,
};

// ============================================================================
// Helper Functions for Creating Mock Data
// ============================================================================

fn page_of(text: &str, top: f32) -> PageInput {
    let glyphs = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            Glyph::new(
                c.to_string(),
                12.0,
                "Arial",
                i as f32 * 7.2,
                top,
                Color::black(),
            )
        })
        .collect();
    PageInput::new(595.28, 841.89, glyphs)
}

fn joined_texts(pages: &[pdf_runs::ExtractedPage]) -> Vec<String> {
    pages
        .iter()
        .map(|p| p.runs.iter().map(|r| r.text.as_str()).collect())
        .collect()
}

// ============================================================================
// Determinism and Ordering
// ============================================================================

#[test]
fn test_pages_return_in_index_order() {
    let inputs: Vec<PageInput> = (0..23).map(|i| page_of(&format!("page{}", i), 0.0)).collect();
    let pipeline = SegmentationPipeline::with_config(PipelineConfig::new().with_workers(4));
    let pages = pipeline.process(inputs);

    assert_eq!(pages.len(), 23);
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.index, i);
    }
    let expected: Vec<String> = (0..23).map(|i| format!("page{}", i)).collect();
    assert_eq!(joined_texts(&pages), expected);
}

#[test]
fn test_worker_count_does_not_change_output() {
    let inputs: Vec<PageInput> = (0..9).map(|i| page_of(&format!("text{}", i), 10.0)).collect();

    let sequential = SegmentationPipeline::with_config(PipelineConfig::new().with_workers(1))
        .process(inputs.clone());
    let parallel = SegmentationPipeline::with_config(PipelineConfig::new().with_workers(5))
        .process(inputs);

    assert_eq!(sequential, parallel);
}

#[test]
fn test_default_config_uses_available_parallelism() {
    let pipeline = SegmentationPipeline::new();
    assert_eq!(pipeline.config().workers, 0);

    let pages = pipeline.process(vec![page_of("hello", 0.0), page_of("world", 0.0)]);
    assert_eq!(joined_texts(&pages), ["hello", "world"]);
}

// ============================================================================
// Page Independence
// ============================================================================

#[test]
fn test_pages_do_not_share_segmentation_state() {
    // A word left "open" at the end of one page must not leak into the next
    let pages = SegmentationPipeline::new().process(vec![page_of("abc", 0.0), page_of("def", 0.0)]);
    assert_eq!(joined_texts(&pages), ["abc", "def"]);
    assert_eq!(pages[0].runs.len(), 1);
    assert_eq!(pages[1].runs.len(), 1);
}

#[test]
fn test_empty_pages_yield_empty_runs() {
    let pages = SegmentationPipeline::new().process(vec![
        PageInput::new(612.0, 792.0, vec![]),
        page_of("x", 0.0),
    ]);
    assert!(pages[0].runs.is_empty());
    assert_eq!(pages[1].runs.len(), 1);
}

// ============================================================================
// Document Assembly
// ============================================================================

#[test]
fn test_assembled_document_preserves_page_order() {
    let inputs: Vec<PageInput> = (0..6).map(|i| page_of(&format!("p{}", i), 0.0)).collect();
    let pages = SegmentationPipeline::with_config(PipelineConfig::new().with_workers(3))
        .process(inputs);
    let doc = ExtractedDocument::assemble("multi.pdf", DocumentMetadata::default(), pages);

    assert_eq!(doc.page_count, 6);
    assert_eq!(doc.pages[5].runs[0].text, "p5");
}
