use maudit::{AssetsOptions, BuildOptions, BuildOutput, content_sources, coronate, routes};

mod components;
mod content;
mod layout;
mod routes;
mod site;

use routes::*;

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    coronate(
        routes![
            Index,
            About,
            FeaturesIndex,
            FeaturesPanel,
            ProjectsIndex,
            ProjectsCategory,
            BlogIndex,
            BlogCategoryPage,
            Contact,
            NotFound
        ],
        content_sources![],
        BuildOptions {
            base_url: Some(site::base_url()),
            assets: AssetsOptions {
                ..Default::default()
            },
            ..Default::default()
        },
    )
}
