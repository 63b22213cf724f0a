use askama::Template;
use askama_web::WebTemplate;

pub struct ViewLink {
    pub name: String,
    pub title: String,
    pub kind: String,
    pub ready: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub views: Vec<ViewLink>,
    pub active: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "viewer.html")]
pub struct ViewerTemplate {
    pub name: String,
    pub title: String,
}
