#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Request error")]
    Request(#[from] reqwest::Error),
    #[error("No element matched {0}")]
    MissingElement(&'static str),
    #[error("Question/answer mismatch: {questions} questions, {answers} answers")]
    PairMismatch { questions: usize, answers: usize },
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
