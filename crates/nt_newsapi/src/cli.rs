use std::num::NonZeroUsize;
use std::sync::Arc;
use clap::{Args, Subcommand};
use nt_core::{ArticleBoard, BoardView, Category, NewsApiConfig, Result};
use nt_core::pagination::PAGE_SIZE;
use crate::NewsApiClient;

#[derive(Args, Clone, Debug)]
pub struct HeadlinesArgs {
    #[command(subcommand)]
    pub command: HeadlinesCommands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum HeadlinesCommands {
    /// Fetch top headlines for a category and print one page
    Fetch {
        /// One of: business, entertainment, general, health, science, sports, technology
        category: Category,
        /// Page to print, starting at 1
        #[arg(long, default_value = "1")]
        page: NonZeroUsize,
    },
    /// List available categories
    Categories,
}

/// `config` is only resolved for commands that talk to the API.
pub async fn handle_command<F>(args: HeadlinesArgs, config: F) -> Result<()>
where
    F: FnOnce() -> Result<NewsApiConfig>,
{
    match args.command {
        HeadlinesCommands::Fetch { category, page } => {
            let client = NewsApiClient::new(config()?)?;
            let board = ArticleBoard::new(Arc::new(client));
            board.try_load(category).await?;
            board.go_to_page(page).await;
            print!("{}", format_view(&board.view().await));
        }
        HeadlinesCommands::Categories => {
            println!("Available categories:");
            for category in Category::ALL {
                println!("  {}", category);
            }
        }
    }
    Ok(())
}

/// Plain-text rendition of one board page.
pub fn format_view(view: &BoardView) -> String {
    let mut out = String::new();
    let category = view
        .category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "headlines".to_string());
    out.push_str(&format!(
        "📰 {}: page {} of {} ({} articles)\n",
        category, view.current_page, view.total_pages, view.article_count
    ));

    if view.cards.is_empty() {
        out.push_str("   No headlines on this page.\n");
    }

    let first = view.current_page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    for (i, card) in view.cards.iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", first + i + 1, card.title));
        if let Some(description) = &card.description {
            out.push_str(&format!("     {}\n", description));
        }
        out.push_str(&format!("     {}\n", card.url));
    }

    let mut nav = vec![if view.prev.disabled { "·Prev·".to_string() } else { "‹ Prev".to_string() }];
    nav.extend(view.pages.iter().map(|p| {
        if p.active {
            format!("[{}]", p.number)
        } else {
            p.number.to_string()
        }
    }));
    nav.push(if view.next.disabled { "·Next·".to_string() } else { "Next ›".to_string() });
    out.push_str(&nav.join(" "));
    out.push('\n');
    out
}
