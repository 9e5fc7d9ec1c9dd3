use anyhow::{Context, Result};
use tokio::runtime::Builder as TokioRuntimeBuilder;

use photo_gallery::{Frame, Gallery, GalleryConfig, GalleryEvent, LoadState, Renderer};

/// Prints frames as plain text.
struct TextRenderer;

impl Renderer for TextRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        if let LoadState::Failed(reason) = frame.load_state {
            println!("catalog unavailable: {}", reason);
        }

        for card in &frame.cards {
            let item = card.item;
            let src = if item.has_src() { item.src() } else { "<no image>" };
            println!(
                "{:>4}  {:<10}  {:<24}  {:<8}  {}",
                card.position,
                item.date(),
                item.title(),
                item.units().as_str(),
                src
            );
        }

        let pages: Vec<String> = frame
            .pager
            .pages()
            .map(|page| {
                if page == frame.pager.current_page {
                    format!("[{}]", page)
                } else {
                    page.to_string()
                }
            })
            .collect();
        println!(
            "{}  |  page {}/{}  {}",
            frame.pager.range_label,
            frame.pager.current_page,
            frame.pager.total_pages,
            pages.join(" ")
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "photo_gallery=info"
                    .parse()
                    .context("Invalid default log directive")?,
            ),
        )
        .init();

    // Usage: photo-gallery [CATALOG] [QUERY]
    let mut args = std::env::args().skip(1);
    let mut config = GalleryConfig::from_env();
    if let Some(catalog) = args.next() {
        config.catalog = catalog;
    }
    let query = args.next();

    let runtime = TokioRuntimeBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;
    let mut gallery = runtime.block_on(Gallery::load(&config.source(), &config));

    let mut renderer = TextRenderer;
    match query {
        Some(text) => {
            gallery.handle(GalleryEvent::QueryTextChanged(text), &mut renderer);
        }
        None => renderer.draw(&gallery.frame()),
    }

    Ok(())
}
