// File: crates/speed-chart-core/src/component.rs
// Summary: Mounted chart component: owns dataset and surface, re-renders on data change or resize.
// Notes:
// - Loading is split into `mount` (hands out a ticket) and `complete_load`
//   (accepts the result). A result whose ticket is stale, or that arrives
//   after `unmount`, is dropped instead of touching torn-down state.

use tracing::{debug, error, warn};

use crate::chart::{ChartOptions, SpeedChart};
use crate::clean::clean_with_limit;
use crate::error::LoadError;
use crate::geometry::{ChartGeometry, ContainerSize};
use crate::load::{load_records, Source};
use crate::record::{Dataset, RawRecord};
use crate::scene::Surface;

/// Identifies one load started by [`SpeedChartComponent::mount`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

type Observer = Box<dyn FnMut(&Dataset)>;

pub struct SpeedChartComponent {
    chart: SpeedChart,
    container: ContainerSize,
    dataset: Dataset,
    surface: Surface,
    geometry: Option<ChartGeometry>,
    mounted: bool,
    generation: u64,
    renders: u64,
    observers: Vec<Observer>,
}

impl SpeedChartComponent {
    pub fn new(options: ChartOptions, container: ContainerSize) -> Self {
        Self {
            chart: SpeedChart::new(options),
            container,
            dataset: Dataset::empty(),
            surface: Surface::default(),
            geometry: None,
            mounted: false,
            generation: 0,
            renders: 0,
            observers: Vec::new(),
        }
    }

    /// Start a mount; the returned ticket must accompany the load result.
    /// Data from an earlier mount does not carry over.
    pub fn mount(&mut self) -> LoadTicket {
        self.mounted = true;
        self.dataset = Dataset::empty();
        self.generation += 1;
        LoadTicket { generation: self.generation }
    }

    /// Tear down. Loads still in flight will be ignored when they complete.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.surface.clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Accept the outcome of a load. Returns whether it was applied.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<Vec<RawRecord>, LoadError>) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            warn!(ticket = ticket.generation, current = self.generation, "dropping load for a stale mount");
            return false;
        }
        match result {
            Ok(records) => {
                let dataset = clean_with_limit(records, self.chart.options.top_n);
                self.set_dataset(dataset);
            }
            Err(err) => {
                error!(error = %err, "error loading CSV");
                self.set_dataset(Dataset::empty());
            }
        }
        true
    }

    /// Mount, fetch and apply in one go.
    pub fn mount_and_load(&mut self, source: &Source) -> &Dataset {
        let ticket = self.mount();
        let result = load_records(source);
        self.complete_load(ticket, result);
        &self.dataset
    }

    /// Replace the dataset; every replacement is a change and triggers a render.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.on_data_change();
    }

    /// New container size. Geometry and scales are recomputed immediately.
    pub fn resize(&mut self, container: ContainerSize) {
        if container == self.container {
            return;
        }
        self.container = container;
        if self.mounted {
            self.render();
        }
    }

    /// Register a callback run after each data-driven render.
    pub fn subscribe(&mut self, observer: impl FnMut(&Dataset) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn on_data_change(&mut self) {
        self.render();
        for observer in &mut self.observers {
            observer(&self.dataset);
        }
    }

    fn render(&mut self) {
        let geometry = self.chart.render(&mut self.surface, &self.dataset, self.container);
        self.geometry = Some(geometry);
        self.renders += 1;
        debug!(render = self.renders, width = geometry.width, height = geometry.height, "rendered");
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn surface(&self) -> &Surface { &self.surface }
    pub fn chart(&self) -> &SpeedChart { &self.chart }
    pub fn container(&self) -> ContainerSize { self.container }
    /// Geometry of the most recent render, if any.
    pub fn geometry(&self) -> Option<ChartGeometry> { self.geometry }
    /// How many times the surface has been redrawn.
    pub fn render_count(&self) -> u64 { self.renders }
}
