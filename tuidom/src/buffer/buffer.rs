use super::Cell;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Characters of one row, wide-character continuations skipped, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let row = &self.cells[start..start + self.width as usize];
        let text: String = row
            .iter()
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect();
        text.trim_end().to_string()
    }

    /// Plain-text snapshot of the whole buffer, one string per row.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }

    /// Cell position of the first occurrence of `needle`.
    pub fn find_text(&self, needle: &str) -> Option<(u16, u16)> {
        (0..self.height).find_map(|y| {
            let cells: Vec<(u16, char)> = (0..self.width)
                .filter_map(|x| self.get(x, y).map(|cell| (x, cell)))
                .filter(|(_, cell)| !cell.wide_continuation)
                .map(|(x, cell)| (x, cell.char))
                .collect();
            let line: String = cells.iter().map(|(_, ch)| *ch).collect();
            let byte = line.find(needle)?;
            let index = line[..byte].chars().count();
            cells.get(index).map(|(x, _)| (*x, y))
        })
    }
}
