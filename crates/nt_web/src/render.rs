use minijinja::{context, Environment};
use nt_core::{BoardView, Category, Error, Result};

const BOARD_TEMPLATE: &str = include_str!("../templates/board.html");
const HEADLINE_CARD_TEMPLATE: &str = include_str!("../templates/headline_card.html");

/// HTML rendering of the board. Templates ending in `.html` are auto-escaped.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("board.html", BOARD_TEMPLATE)
            .map_err(|e| Error::External(e.into()))?;
        env.add_template("headline_card.html", HEADLINE_CARD_TEMPLATE)
            .map_err(|e| Error::External(e.into()))?;
        Ok(Self { env })
    }

    pub fn render_board(&self, view: &BoardView) -> Result<String> {
        let categories: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        self.env
            .get_template("board.html")
            .and_then(|template| template.render(context! { view => view, categories => categories }))
            .map_err(|e| Error::External(e.into()))
    }
}
