//! In-memory document builders for tests.

use std::io::Cursor;

use docx_rust::document::Paragraph;
use docx_rust::Docx;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

/// A PDF with one page per entry, each page drawing its text in a single
/// text object.
pub(crate) fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let mut doc = build_pdf(pages, |_, content| content);
    save(&mut doc)
}

/// Same layout as `pdf_with_pages`, protected by the PDF standard security
/// handler (RC4, 40-bit key, revision 2) with the given user password.
pub(crate) fn encrypted_pdf_with_pages(pages: &[&str], user_password: &str) -> Vec<u8> {
    const PERMISSIONS: i32 = -4;
    let file_id = b"doc-extract-fixture".to_vec();

    let owner_digest = md5::compute(pad_password(b"owner")).0;
    let owner_entry = rc4(&owner_digest[..5], &pad_password(user_password.as_bytes()));

    let mut key_input = pad_password(user_password.as_bytes()).to_vec();
    key_input.extend_from_slice(&owner_entry);
    key_input.extend_from_slice(&PERMISSIONS.to_le_bytes());
    key_input.extend_from_slice(&file_id);
    let file_key = md5::compute(&key_input).0[..5].to_vec();
    let user_entry = rc4(&file_key, &PASSWORD_PADDING);

    let mut doc = build_pdf(pages, |(number, generation), content| {
        let mut object_key = file_key.clone();
        object_key.extend_from_slice(&number.to_le_bytes()[..3]);
        object_key.extend_from_slice(&generation.to_le_bytes());
        let object_digest = md5::compute(&object_key).0;
        rc4(&object_digest[..10], &content)
    });

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "Length" => 40,
        "O" => Object::String(owner_entry, StringFormat::Hexadecimal),
        "U" => Object::String(user_entry, StringFormat::Hexadecimal),
        "P" => PERMISSIONS as i64,
    });
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::String(file_id.clone(), StringFormat::Hexadecimal),
            Object::String(file_id, StringFormat::Hexadecimal),
        ],
    );

    save(&mut doc)
}

// `seal` maps each content stream's plain bytes to what gets stored
fn build_pdf(pages: &[&str], seal: impl Fn(ObjectId, Vec<u8>) -> Vec<u8>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.new_object_id();
        let stored = seal(content_id, content.encode().unwrap());
        doc.objects
            .insert(content_id, Object::Stream(Stream::new(dictionary! {}, stored)));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(doc: &mut Document) -> Vec<u8> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

const PASSWORD_PADDING: [u8; 32] = [
    0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01,
    0x08, 0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53,
    0x69, 0x7A,
];

fn pad_password(password: &[u8]) -> [u8; 32] {
    let mut padded = PASSWORD_PADDING;
    let len = password.len().min(32);
    padded[..len].copy_from_slice(&password[..len]);
    padded[len..].copy_from_slice(&PASSWORD_PADDING[..32 - len]);
    padded
}

fn rc4(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut state: Vec<u8> = (0..=255).collect();
    let mut j: u8 = 0;
    for i in 0..256 {
        j = j.wrapping_add(state[i]).wrapping_add(key[i % key.len()]);
        state.swap(i, j as usize);
    }

    let (mut i, mut j) = (0u8, 0u8);
    data.iter()
        .map(|byte| {
            i = i.wrapping_add(1);
            j = j.wrapping_add(state[i as usize]);
            state.swap(i as usize, j as usize);
            byte ^ state[state[i as usize].wrapping_add(state[j as usize]) as usize]
        })
        .collect()
}

/// A DOCX whose body holds one paragraph per entry; empty entries become
/// paragraphs with no runs.
pub(crate) fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = Docx::default();
    for text in paragraphs {
        let paragraph = if text.is_empty() {
            Paragraph::default()
        } else {
            Paragraph::default().push_text(*text)
        };
        docx.document.push(paragraph);
    }

    docx.write(Cursor::new(Vec::new())).unwrap().into_inner()
}
