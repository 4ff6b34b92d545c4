use std::fmt::Debug;
use std::process::ExitCode;
use tracing::error;
use lms_catalog::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use lms_catalog::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use lms_catalog::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use lms_catalog::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use lms_catalog::catalog::domain::CatalogService;
use lms_catalog::catalog::factory::create_catalog_service;
use lms_catalog::catalog::listing::{format_books, format_patrons};
use lms_catalog::checkout::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use lms_catalog::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use lms_catalog::core::command::{parse_request, Command, CommandError};
use lms_catalog::core::domain::Configuration;
use lms_catalog::gateway::GatewayPublisherVia;
use lms_catalog::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
use lms_catalog::utils::logs::setup_tracing;

const DEV_MODE: bool = true;

fn main() -> ExitCode {
    setup_tracing(DEV_MODE);

    let config = if DEV_MODE {
        Configuration::new("dev")
    } else {
        Configuration::new("main")
    };

    let res = run_checks(&config).and_then(|_| run_demo(&config));
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("catalog run failed: {}", err);
            println!("Exception: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn new_catalog(config: &Configuration) -> Box<dyn CatalogService> {
    create_catalog_service(config, GatewayPublisherVia::Logs)
}

// A step that must succeed; its failure aborts the run
fn expect_ok<T>(label: &str, res: Result<T, CommandError>) -> Result<T, CommandError> {
    match res {
        Ok(value) => {
            println!("[ok] {}", label);
            Ok(value)
        }
        Err(err) => Err(err),
    }
}

// A step that must be rejected with an expected error; anything else aborts the run
fn expect_rejected<T: Debug>(label: &str, res: Result<T, CommandError>) -> Result<(), CommandError> {
    match res {
        Err(err) if err.is_expected() => {
            println!("[ok] {} rejected: {}", label, err);
            Ok(())
        }
        Err(err) => Err(err),
        Ok(value) => Err(CommandError::Runtime {
            message: format!("{} should have been rejected but returned {:?}", label, value),
            reason_code: None,
        }),
    }
}

fn run_checks(config: &Configuration) -> Result<(), CommandError> {
    println!("Running checks...");
    let mut catalog = new_catalog(config);

    for (isbn, title, author) in [
        ("ISBN-001", "Introduction to C++", "Bjarne Stroustrup"),
        ("ISBN-002", "Programming Principles", "Jane Doe"),
        ("ISBN-003", "Algorithms in Depth", "Robert Sedgewick"),
    ] {
        expect_ok(format!("add book {}", isbn).as_str(),
                  AddBookCommand::new(catalog.as_mut()).execute(AddBookCommandRequest::new(isbn, title, author)))?;
    }
    for (patron_id, name) in [("U001", "Alice"), ("U002", "Bob")] {
        expect_ok(format!("add patron {}", patron_id).as_str(),
                  AddPatronCommand::new(catalog.as_mut()).execute(AddPatronCommandRequest::new(patron_id, name)))?;
    }

    let req: SearchBooksCommandRequest = parse_request(serde_json::json!({"title": "c++"}))?;
    let found = expect_ok("search title c++", SearchBooksCommand::new(catalog.as_ref()).execute(req))?;
    if found.books.len() != 1 || found.books[0].isbn != "ISBN-001" {
        return Err(CommandError::Runtime {
            message: format!("search for c++ returned {:?}", found.books),
            reason_code: None,
        });
    }

    expect_ok("U001 borrows ISBN-001",
              BorrowBookCommand::new(catalog.as_mut()).execute(BorrowBookCommandRequest::new("U001", "ISBN-001")))?;
    let book = expect_ok("get ISBN-001",
                         GetBookCommand::new(catalog.as_ref()).execute(GetBookCommandRequest::new("ISBN-001")))?;
    println!("{}", book.book);

    expect_rejected("U002 borrows ISBN-001",
                    BorrowBookCommand::new(catalog.as_mut()).execute(BorrowBookCommandRequest::new("U002", "ISBN-001")))?;
    expect_ok("U001 returns ISBN-001",
              ReturnBookCommand::new(catalog.as_mut()).execute(ReturnBookCommandRequest::new("U001", "ISBN-001")))?;
    expect_rejected("U002 returns ISBN-002",
                    ReturnBookCommand::new(catalog.as_mut()).execute(ReturnBookCommandRequest::new("U002", "ISBN-002")))?;
    expect_rejected("remove ISBN-999",
                    RemoveBookCommand::new(catalog.as_mut()).execute(RemoveBookCommandRequest::new("ISBN-999")))?;

    expect_ok("U002 borrows ISBN-002",
              BorrowBookCommand::new(catalog.as_mut()).execute(BorrowBookCommandRequest::new("U002", "ISBN-002")))?;
    expect_rejected("remove borrowed ISBN-002",
                    RemoveBookCommand::new(catalog.as_mut()).execute(RemoveBookCommandRequest::new("ISBN-002")))?;
    expect_ok("U002 returns ISBN-002",
              ReturnBookCommand::new(catalog.as_mut()).execute(ReturnBookCommandRequest::new("U002", "ISBN-002")))?;
    expect_ok("remove ISBN-002",
              RemoveBookCommand::new(catalog.as_mut()).execute(RemoveBookCommandRequest::new("ISBN-002")))?;

    println!("All checks passed.");
    Ok(())
}

fn run_demo(config: &Configuration) -> Result<(), CommandError> {
    let mut catalog = new_catalog(config);
    catalog.add_book(&AddBookCommandRequest::new("ISBN-A", "Learn C++", "Author A").build_book())?;
    catalog.add_book(&AddBookCommandRequest::new("ISBN-B", "Data Structures", "Author B").build_book())?;
    catalog.add_book(&AddBookCommandRequest::new("ISBN-C", "Databases", "Author C").build_book())?;
    catalog.add_patron(&AddPatronCommandRequest::new("U100", "Charlie").build_patron())?;

    println!("\n=== Simple demo ===");
    println!("{}", format_books(&catalog.list_books()?));
    println!("{}", format_patrons(&catalog.list_patrons()?));

    println!("\nCharlie (U100) borrows ISBN-A...");
    catalog.borrow_book("U100", "ISBN-A")?;
    println!("{}", format_books(&catalog.list_books()?));

    println!("\nCharlie returns ISBN-A...");
    catalog.return_book("U100", "ISBN-A")?;
    println!("{}", format_books(&catalog.list_books()?));

    println!("\nSearch for 'Data':");
    for book in catalog.search_by_title("Data")? {
        println!("{}", book);
    }
    Ok(())
}
