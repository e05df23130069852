//! Shared fixtures for the integration tests

use lopdf::{dictionary, Document, Object, Stream};
use pdf_digest::config::{
    Config, FetcherConfig, InputConfig, InputFormat, LoggingConfig, PipelineConfig, StoreConfig,
};

/// Builds a PDF with one page per entry of `page_texts`
pub fn create_pdf(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.4");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut page_ids = Vec::new();
    for text in page_texts {
        let content = format!(
            "BT /F1 12 Tf 100 700 Td ({}) Tj ET",
            text.replace('\\', "\\\\")
                .replace('(', "\\(")
                .replace(')', "\\)")
        );
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
            "Contents" => content_id,
        }));
    }

    let kids: Vec<Object> = page_ids.iter().map(|&id| id.into()).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_texts.len() as i64),
    });

    for page_id in &page_ids {
        if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(*page_id) {
            dict.set("Parent", pages_id);
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("Failed to serialize test PDF");
    buffer
}

/// Creates a test configuration writing to `db_path`
pub fn create_test_config(db_path: &str, concurrency: usize) -> Config {
    Config {
        input: InputConfig {
            path: "unused.json".to_string(),
            format: InputFormat::Json,
        },
        pipeline: PipelineConfig { concurrency },
        fetcher: FetcherConfig {
            user_agent: "TestDigest/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        },
        store: StoreConfig {
            database_path: db_path.to_string(),
        },
        logging: LoggingConfig::default(),
    }
}
