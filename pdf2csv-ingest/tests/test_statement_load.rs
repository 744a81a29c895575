use pdf2csv_ingest::{Extraction, Issuer, LoadError, Loader, Statement, TextExtractor};
use std::path::{Path, PathBuf};

/// Serves `tests/fixtures/<stem>.txt` as the extracted text of `<stem>.pdf`.
struct FixtureExtractor {
    code: Option<i32>,
}

impl TextExtractor for FixtureExtractor {
    fn program(&self) -> &str {
        "pdftotext"
    }

    async fn extract(&self, path: &Path) -> Result<Extraction, LoadError> {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let text = std::fs::read_to_string(fixture_dir().join(format!("{stem}.txt")))
            .unwrap_or_default();
        Ok(Extraction {
            text,
            code: self.code,
        })
    }
}

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn loader() -> Loader<FixtureExtractor> {
    Loader::new(FixtureExtractor { code: Some(0) }).unwrap()
}

fn rows(st: &Statement) -> Vec<(String, String, String)> {
    st.billable()
        .map(|t| (t.date().to_string(), t.description(), t.amount().to_string()))
        .collect()
}

fn row(date: &str, description: &str, amount: &str) -> (String, String, String) {
    (date.to_string(), description.to_string(), amount.to_string())
}

#[tokio::test]
async fn test_chase_statement() {
    let st = loader().load(Path::new("chase.pdf")).await.unwrap();
    assert_eq!(st.issuer(), Issuer::Chase);
    assert_eq!(st.due_date().year(), "23");
    assert_eq!(st.len(), 6);

    let rewards: Vec<_> = st.iter().filter(|t| t.is_rewards()).collect();
    assert_eq!(rewards.len(), 1);
    assert_eq!(rewards[0].points(), Some("7,890"));
    assert_eq!(rewards[0].amount(), "4.56");

    assert_eq!(
        rows(&st),
        vec![
            row("01/11/23", "Payment Thank You-Mobile", "-1020.11"),
            row("01/03/23", "STARBUCKS STORE 10394 SEATTLE WA", "5.75"),
            row("01/09/23", "AMAZON MKTPLACE PMTS AMZN.COM/BILL WA #123-4567890-1234567", "12.34"),
            row("01/21/23", "COSTCO WHSE #0001 ISSAQUAH WA #113-1111111-2222222", "1204.91"),
            row("01/23/23", "UBER TRIP HELP.UBER.COM CA #555-0000000-1111111", "18.00"),
        ]
    );
}

#[tokio::test]
async fn test_amex_statement() {
    let st = loader().load(Path::new("amex.pdf")).await.unwrap();
    assert_eq!(st.issuer(), Issuer::Amex);
    assert_eq!(
        rows(&st),
        vec![
            row("01/04/23", "BLUE BOTTLE COFFEE OAKLAND CA", "7.25"),
            row("01/06/23", "UBER TRIP HELP.UBER.COM SAN FRANCISCO CA", "23.10"),
            row("01/12/23", "DELTA AIR LINES ATLANTA Passenger Ticket Ticket Number 0062345678901", "611.83"),
            row("01/20/23", "AMAZON.COM AMZN.COM/BILL WA", "-15.00"),
        ]
    );
}

#[tokio::test]
async fn test_discover_statement() {
    let st = loader().load(Path::new("discover.pdf")).await.unwrap();
    assert_eq!(st.issuer(), Issuer::Discover);
    assert_eq!(st.due_date().year(), "2023");
    assert_eq!(
        rows(&st),
        vec![
            row("01/05/2023", "TRADER JOE S #123 AUSTIN TX", "41.07"),
            row("01/09/2023", "SOUTHWEST AIRLINES DALLAS TX", "412.80"),
            row("01/20/2023", "INTERNET PAYMENT - THANK YOU", "-250.00"),
            row("01/20/2023", "INTEREST CHARGE ON PURCHASES", "3.21"),
        ]
    );
}

#[tokio::test]
async fn test_boa_statement_drops_lone_header() {
    let st = loader().load(Path::new("boa.pdf")).await.unwrap();
    assert_eq!(st.issuer(), Issuer::BankOfAmerica);
    assert_eq!(st.due_date().year(), "2022");
    let descriptions: Vec<String> = st.iter().map(|t| t.description()).collect();
    assert_eq!(
        descriptions,
        vec![
            "12/06/22 STARBUCKS STORE 0123",
            "12/09/22 AIRBNB HMXYZ AIRBNB.COM CA",
            "12/10/22 PAYMENT - THANK YOU",
            "12/16/22 SHELL OIL 57442 AUSTIN TX",
        ]
    );
    assert!(descriptions.iter().all(|d| !d.contains("PAGE 2")));
    assert_eq!(st.line_items()[1].amount(), "1250.00");
}

#[tokio::test]
async fn test_missing_due_date_is_fatal() {
    let err = loader().load(Path::new("/statements/nodate.pdf")).await.unwrap_err();
    assert!(matches!(err, LoadError::DueDateNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "parse error: could not match due date in /statements/nodate.pdf"
    );
}

#[tokio::test]
async fn test_extractor_failure_names_path_and_code() {
    let loader = Loader::new(FixtureExtractor { code: Some(1) }).unwrap();
    let err = loader.load(Path::new("chase.pdf")).await.unwrap_err();
    match &err {
        LoadError::Extraction { path, code, .. } => {
            assert_eq!(path, Path::new("chase.pdf"));
            assert_eq!(*code, Some(1));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "pdftotext: failed to parse chase.pdf (exit code 1)");
}

#[tokio::test]
async fn test_documents_are_independent() {
    let loader = loader();
    // boa.txt ends with a resolved row; amex.txt ends with an unresolved header
    let amex = loader.load(Path::new("amex.pdf")).await.unwrap();
    let boa = loader.load(Path::new("boa.pdf")).await.unwrap();
    let amex_again = loader.load(Path::new("amex.pdf")).await.unwrap();
    assert_eq!(amex, amex_again);
    assert_eq!(boa.len(), 4);
}
