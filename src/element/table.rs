//! Tables, rows and cells.
//!
//! Only cells hold elements. A table and its rows are plain structure; every
//! row and cell still takes an identity from the shared allocator so writers
//! can address them.
use super::{Container, ContainerBody, ContainerKind, ElementContext, ElementMeta};
use crate::common::id::ElementId;
use crate::style::{StyleSpec, TableStyle};

#[derive(Debug)]
pub struct Table {
    pub(crate) meta: ElementMeta,
    ctx: ElementContext,
    style: Box<TableStyle>,
    rows: Vec<Row>,
}

impl Table {
    pub(crate) fn new(meta: ElementMeta, ctx: ElementContext, style: StyleSpec<TableStyle>) -> Self {
        Self {
            meta,
            ctx,
            style: style.resolve(),
            rows: Vec::new(),
        }
    }

    /// Append a row, optionally with a fixed height in twips.
    pub fn add_row(&mut self, height: Option<u32>) -> &mut Row {
        let row = Row {
            id: self.ctx.ids.next(),
            height,
            ctx: self.ctx.clone(),
            cells: Vec::new(),
        };
        let index = self.rows.len();
        self.rows.push(row);
        &mut self.rows[index]
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub fn count_rows(&self) -> usize {
        self.rows.len()
    }

    /// Widest row's cell count.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    pub fn set_style(&mut self, spec: impl Into<StyleSpec<TableStyle>>) -> &mut Self {
        spec.into().apply_to(&mut self.style);
        self
    }
}

#[derive(Debug)]
pub struct Row {
    id: ElementId,
    height: Option<u32>,
    ctx: ElementContext,
    cells: Vec<Cell>,
}

impl Row {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// Append a cell, optionally with a fixed width in twips.
    pub fn add_cell(&mut self, width: Option<u32>) -> &mut Cell {
        let cell = Cell {
            id: self.ctx.ids.next(),
            width,
            body: ContainerBody::new(ContainerKind::Cell, self.ctx.clone()),
        };
        let index = self.cells.len();
        self.cells.push(cell);
        &mut self.cells[index]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }
}

#[derive(Debug)]
pub struct Cell {
    id: ElementId,
    width: Option<u32>,
    body: ContainerBody,
}

impl Cell {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }
}

impl Container for Cell {
    fn body(&self) -> &ContainerBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ContainerBody {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use crate::common::id::IdAllocator;
    use crate::element::{Container, DocumentElement, ElementKind, Section};
    use crate::style::StyleAttributes;

    #[test]
    fn test_table_structure() {
        let mut section = Section::new(0, (), IdAllocator::isolated());
        let table = section.add_table().unwrap();
        let table_id = table.id();

        let row = table.add_row(Some(400));
        assert_eq!(row.height(), Some(400));
        assert!(row.id() > table_id);
        row.add_cell(Some(2000)).add_text("A1").unwrap();
        row.add_cell(None).add_text("B1").unwrap();
        table.add_row(None).add_cell(None);

        assert_eq!(table.count_rows(), 2);
        assert_eq!(table.column_count(), 2);
        let first = table.row(0).unwrap();
        assert_eq!(first.cell(0).unwrap().width(), Some(2000));
        assert_eq!(first.cell(1).unwrap().count_elements(), 1);
        assert_eq!(section.count_elements(), 1);
    }

    #[test]
    fn test_cell_legality() {
        let mut section = Section::new(0, (), IdAllocator::isolated());
        let cell = section.add_table().unwrap().add_row(None).add_cell(None);
        cell.add_title("Heading", 1).unwrap();
        cell.add_preserve_text("Page {PAGE}").unwrap();
        cell.add_table().unwrap();
        cell.add_footnote().unwrap();
        assert!(cell.add_page_break().is_err());
        assert!(cell.add_toc().is_err());
        let kinds: Vec<_> = cell.elements().iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            [ElementKind::Title, ElementKind::PreserveText, ElementKind::Table, ElementKind::Footnote]
        );
    }

    #[test]
    fn test_table_style_attributes() {
        let mut section = Section::new(0, (), IdAllocator::isolated());
        let table = section.add_table().unwrap();
        table.set_style(StyleAttributes::new().with("borderSize", 6).with("cellMargin", 80));
        assert_eq!(table.style().border_size(), Some(6));
        assert_eq!(table.style().cell_margin(), Some(80));
        table.set_style(());
        assert_eq!(table.style().border_size(), Some(6));
    }
}
