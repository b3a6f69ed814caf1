use bestpaper_parser::ast::Paper;
use std::borrow::Cow;

/// Google Scholar search for a title by the given author surname
pub fn scholar_search_url(title: &str, surname: &str) -> String {
    format!(
        "http://scholar.google.com/scholar?as_q=&num=10&btnG=Search+Scholar&as_epq={}&as_oq=&as_eq=&as_occt=any&as_sauthors={}",
        urlencoding::encode(title),
        urlencoding::encode(surname),
    )
}

/// The paper's own URL, or a Scholar search when it has none
pub fn paper_link(paper: &Paper) -> Cow<'_, str> {
    match &paper.url {
        Some(url) => Cow::Borrowed(url.as_str()),
        None => Cow::Owned(scholar_search_url(
            &paper.title,
            paper.first_author_surname().unwrap_or_default(),
        )),
    }
}
