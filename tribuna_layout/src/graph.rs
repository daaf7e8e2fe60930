// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout graph: sectors, tribunes and seats, plus incremental construction.
//!
//! Tribunes are computed per sector. A [`LayoutBuilder`] lets a host request
//! sectors as they become visible and commit the results in one batch; the
//! graph is ready once every sector of the spec has been committed.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::seat::{Seat, SeatId};
use crate::sector::{PlayingField, Sector, SectorLayout};
use crate::spec::StadiumSpec;
use crate::tribune::{Tribune, TribuneGenerator, TribuneId};

/// Geometry of a whole stadium.
#[derive(Clone, Debug, Default)]
pub struct LayoutGraph {
    spec: StadiumSpec,
    layout: SectorLayout,
    tribunes: HashMap<usize, Vec<Tribune>>,
}

impl LayoutGraph {
    /// An empty graph for `spec`, with sectors laid out but no tribunes committed yet.
    pub fn new(spec: StadiumSpec) -> Self {
        Self {
            layout: SectorLayout::compute(&spec),
            spec,
            tribunes: HashMap::new(),
        }
    }

    /// Lays out every sector in one pass.
    pub fn build(spec: StadiumSpec) -> Self {
        let mut builder = LayoutBuilder::new(spec);
        builder.request_all();
        builder.flush();
        builder.finish()
    }

    /// The spec this graph was built from.
    pub fn spec(&self) -> &StadiumSpec {
        &self.spec
    }

    /// Returns `true` once every sector has its tribunes.
    ///
    /// A spec that produces fewer sectors than it asks for (or none) is never ready.
    pub fn is_ready(&self) -> bool {
        let n = self.spec.sector_count;
        n > 0
            && self.layout.sectors.len() == n
            && (0..n).all(|index| self.tribunes.contains_key(&index))
    }

    /// Sectors from the outermost inward.
    pub fn sectors(&self) -> &[Sector] {
        &self.layout.sectors
    }

    /// The playing field.
    pub fn field(&self) -> &PlayingField {
        &self.layout.field
    }

    /// Returns `true` if sector `index` has committed tribunes.
    pub fn has_sector(&self, index: usize) -> bool {
        self.tribunes.contains_key(&index)
    }

    /// Tribunes of one sector, if committed.
    pub fn sector_tribunes(&self, index: usize) -> Option<&[Tribune]> {
        self.tribunes.get(&index).map(Vec::as_slice)
    }

    /// All committed tribunes, in sector order then generation order.
    pub fn tribunes(&self) -> impl Iterator<Item = &Tribune> + '_ {
        (0..self.layout.sectors.len())
            .filter_map(move |index| self.tribunes.get(&index))
            .flatten()
    }

    /// Looks up a tribune.
    pub fn tribune(&self, id: TribuneId) -> Option<&Tribune> {
        self.tribunes.get(&id.sector)?.get(id.index)
    }

    /// Looks up a seat.
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.tribune(id.tribune)?.seat(id.index)
    }

    /// Total number of committed tribunes.
    pub fn tribune_count(&self) -> usize {
        self.tribunes.values().map(Vec::len).sum()
    }

    fn commit(&mut self, sector: usize, tribunes: Vec<Tribune>) {
        self.tribunes.insert(sector, tribunes);
    }
}

/// Incremental construction of a [`LayoutGraph`].
///
/// Requests are computed immediately but only become visible in the graph on
/// [`LayoutBuilder::flush`]. A sector is never computed twice.
#[derive(Debug)]
pub struct LayoutBuilder {
    graph: LayoutGraph,
    pending: Vec<(usize, Vec<Tribune>)>,
}

impl LayoutBuilder {
    /// Starts building for `spec`.
    pub fn new(spec: StadiumSpec) -> Self {
        #[cfg(feature = "tracing")]
        if let Err(err) = spec.validate() {
            tracing::warn!(%err, "stadium spec is invalid; layout stays empty");
        }
        Self {
            graph: LayoutGraph::new(spec),
            pending: Vec::new(),
        }
    }

    /// Computes the tribunes for `sector` unless they are already committed or pending.
    ///
    /// Returns `true` if new work was queued.
    pub fn request(&mut self, sector: usize) -> bool {
        if self.graph.has_sector(sector) || self.pending.iter().any(|(i, _)| *i == sector) {
            #[cfg(feature = "tracing")]
            tracing::trace!(sector, "sector already laid out");
            return false;
        }
        let Some(bounds) = self.graph.layout.sectors.get(sector).copied() else {
            return false;
        };
        let tribunes = TribuneGenerator::new(&self.graph.spec).generate(&bounds);
        #[cfg(feature = "tracing")]
        tracing::debug!(sector, tribunes = tribunes.len(), "sector laid out");
        self.pending.push((sector, tribunes));
        true
    }

    /// Requests every sector of the spec.
    pub fn request_all(&mut self) {
        for sector in 0..self.graph.layout.sectors.len() {
            self.request(sector);
        }
    }

    /// Returns `true` if computed sectors are waiting to be committed.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Commits all pending sectors. Returns the number committed.
    pub fn flush(&mut self) -> usize {
        let count = self.pending.len();
        for (sector, tribunes) in self.pending.drain(..) {
            self.graph.commit(sector, tribunes);
        }
        #[cfg(feature = "tracing")]
        if count > 0 {
            tracing::debug!(
                committed = count,
                ready = self.graph.is_ready(),
                "layout flushed"
            );
        }
        count
    }

    /// Returns `true` once every sector is committed.
    pub fn is_ready(&self) -> bool {
        self.graph.is_ready()
    }

    /// The graph as committed so far.
    pub fn graph(&self) -> &LayoutGraph {
        &self.graph
    }

    /// Consumes the builder, dropping anything not yet flushed.
    pub fn finish(self) -> LayoutGraph {
        self.graph
    }
}
