use crate::{dataset::Dataset, graph::RandomGraphGenerator, views::ViewSettings};

pub struct AppState {
    dataset: &'static Dataset,
    settings: ViewSettings,
    generator: RandomGraphGenerator,
}

impl AppState {
    pub fn new(dataset: &'static Dataset, settings: ViewSettings) -> Self {
        let generator = RandomGraphGenerator::new(settings.max_nodes);
        Self {
            dataset,
            settings,
            generator,
        }
    }

    pub fn dataset(&self) -> &'static Dataset {
        self.dataset
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn generator(&self) -> &RandomGraphGenerator {
        &self.generator
    }
}
