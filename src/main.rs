//! Mech Portfolio native entry point
//!
//! The site itself runs from the library's wasm start function. Natively
//! this prints the demo defaults and checks every article's markup against
//! the ids its demo looks up.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Mech Portfolio (native) starting...");
    log::info!("The site runs in the browser - build the library for wasm32 and serve it");

    let config = mech_portfolio::SiteConfig::load();
    log::info!("Site config: {config:?}");

    print_oscillator_defaults();

    println!("\nChecking article markup...");
    if !check_articles() {
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's start function
}

#[cfg(not(target_arch = "wasm32"))]
fn print_oscillator_defaults() {
    use mech_portfolio::renderer::DynamicsScene;
    use mech_portfolio::sim::Parameter;

    let scene = DynamicsScene::new(400.0, 300.0);
    for param in Parameter::ALL {
        println!("{param:?}: {}", param.format(scene.params.get(param)));
    }
    for line in scene.readouts() {
        println!("{line}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn check_articles() -> bool {
    use mech_portfolio::ui::Article;
    use mech_portfolio::ui::articles::missing_ids;

    let mut ok = true;
    for article in Article::ALL {
        let Some(demo) = article.demo() else {
            println!("✓ {} (no demo)", article.title());
            continue;
        };
        let missing = missing_ids(article.markup(), demo.required_ids());
        if missing.is_empty() {
            println!("✓ {} ({demo:?} demo)", article.title());
        } else {
            println!("✗ {} missing ids: {}", article.title(), missing.join(", "));
            ok = false;
        }
    }
    ok
}
