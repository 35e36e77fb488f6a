//! Basic text splitting.
//!
//! ```bash
//! cargo run --example basic
//! ```

use folio::{Chunker, SplitterConfig, TextSplitter};

fn main() {
    tracing_subscriber::fmt::init();

    let document = "# Machine Learning\n\n\
        Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming.\n\n\
        ## Deep Learning\n\n\
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations.";

    let config = SplitterConfig::builder()
        .chunk_size(120)
        .chunk_overlap(20)
        .build()
        .expect("default bounds are valid");

    let splitter = TextSplitter::with_config(config).expect("default patterns compile");
    let chunks = splitter.chunk(document);

    println!("Document: {} bytes", document.len());
    println!("Chunks: {}\n", chunks.len());

    for chunk in &chunks {
        println!("{chunk}");
        println!("{:?}\n", chunk.text);
    }
}
