use crate::{Error, Result};

use petgraph::unionfind::UnionFind;

////////////////////////////////////////////////////////////////////////////////

const VIRTUAL_TOP: usize = 0;

static MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An `n`-by-`n` grid of sites that are opened one at a time.
///
/// Rows and columns are 1-indexed: valid coordinates lie in `[1, n]`.
/// Row 1 is the top of the grid and row `n` is the bottom.
///
/// Connectivity is tracked by two union-find structures over the same sites.
/// The first one also holds a virtual bottom site and answers [`percolates`].
/// The second one has no bottom site, so a bottom row site can only share a
/// root with the virtual top through a real path of open sites. [`is_full`]
/// queries it, which keeps the answer free of backwash.
///
/// [`percolates`]: Percolation::percolates
/// [`is_full`]: Percolation::is_full
#[derive(Debug, Clone)]
pub struct Percolation {
    size: usize,
    open: Vec<bool>,
    open_sites: usize,
    connectivity: UnionFind<usize>,
    top_connectivity: UnionFind<usize>,
}

impl Percolation {
    /// Creates a new grid with every site blocked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGridSize`] if `size` is 0.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidGridSize { size });
        }

        let sites = size * size;

        Ok(Self {
            size,
            open: vec![false; sites],
            open_sites: 0,
            connectivity: UnionFind::new(sites + 2),
            top_connectivity: UnionFind::new(sites + 1),
        })
    }

    /// Returns grid size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Opens the site at (`row`, `col`). Opening an already open site does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SiteOutOfRange`] if either coordinate is outside
    /// `[1, size]`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.validate(row, col)?;

        let offset = self.offset(row, col);
        if self.open[offset] {
            return Ok(());
        }

        let was_percolating = self.percolates();

        self.open[offset] = true;
        self.open_sites += 1;
        log::trace!("opened site ({row}, {col})");

        let index = self.site_index(row, col);

        if row == 1 {
            self.connectivity.union(VIRTUAL_TOP, index);
            self.top_connectivity.union(VIRTUAL_TOP, index);
        }
        if row == self.size {
            let virtual_bottom = self.virtual_bottom();
            self.connectivity.union(virtual_bottom, index);
        }

        for (neighbour_row, neighbour_col) in neighbours(self.size, row, col) {
            if self.open[self.offset(neighbour_row, neighbour_col)] {
                let neighbour = self.site_index(neighbour_row, neighbour_col);
                self.connectivity.union(index, neighbour);
                self.top_connectivity.union(index, neighbour);
            }
        }

        if !was_percolating && self.percolates() {
            log::debug!(
                "{0}x{0} grid percolates after {1} open sites",
                self.size,
                self.open_sites
            );
        }

        Ok(())
    }

    /// Returns `true` if the site at (`row`, `col`) is open.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SiteOutOfRange`] if either coordinate is outside
    /// `[1, size]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        Ok(self.open[self.offset(row, col)])
    }

    /// Returns `true` if the site at (`row`, `col`) is open and connected to
    /// the top row through open sites.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SiteOutOfRange`] if either coordinate is outside
    /// `[1, size]`.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;

        let is_open = self.open[self.offset(row, col)];
        Ok(is_open
            && self
                .top_connectivity
                .equiv(VIRTUAL_TOP, self.site_index(row, col)))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Returns `true` if an open path connects the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        self.connectivity.equiv(VIRTUAL_TOP, self.virtual_bottom())
    }

    fn validate(&self, row: usize, col: usize) -> Result<()> {
        if contains(self.size, row, col) {
            Ok(())
        } else {
            Err(Error::SiteOutOfRange {
                row,
                col,
                size: self.size,
            })
        }
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.size + (col - 1)
    }

    fn site_index(&self, row: usize, col: usize) -> usize {
        self.offset(row, col) + 1
    }

    fn virtual_bottom(&self) -> usize {
        self.size * self.size + 1
    }
}

fn contains(size: usize, row: usize, col: usize) -> bool {
    (1..=size).contains(&row) && (1..=size).contains(&col)
}

fn neighbours(size: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    MOVES.iter().filter_map(move |&(dr, dc)| {
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        contains(size, row, col).then_some((row, col))
    })
}

////////////////////////////////////////////////////////////////////////////////
