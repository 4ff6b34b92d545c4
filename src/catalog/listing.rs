use crate::books::dto::BookDto;
use crate::patrons::dto::PatronDto;

// Console listing of books, one line each, sorted by ISBN
pub fn format_books(books: &[BookDto]) -> String {
    let mut sorted: Vec<&BookDto> = books.iter().collect();
    sorted.sort_by(|a, b| a.isbn.cmp(&b.isbn));
    let mut out = format!("Library Books ({}):", books.len());
    for book in sorted {
        out.push('\n');
        out.push_str(book.to_string().as_str());
    }
    out
}

pub fn format_patrons(patrons: &[PatronDto]) -> String {
    let mut sorted: Vec<&PatronDto> = patrons.iter().collect();
    sorted.sort_by(|a, b| a.patron_id.cmp(&b.patron_id));
    let mut out = format!("Patrons ({}):", patrons.len());
    for patron in sorted {
        out.push('\n');
        out.push_str(patron.to_string().as_str());
    }
    out
}
