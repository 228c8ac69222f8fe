//! Title block rendering.
//!
//! The fixed-format metadata panel at the bottom of every sheet: project,
//! optional piece, scale, folio, studio and sheet numbering, split into three
//! columns.

use crate::config::TitleLayout;
use crate::scene::{ellipsize, Color, Scene, Stroke, TextItem};

/// Fields shown in a sheet's title block.
#[derive(Debug, Clone, Copy)]
pub struct TitleBlockInfo<'a> {
    pub project: &'a str,
    pub folio: &'a str,
    pub studio: &'a str,
    /// Piece name, on per-piece sheets only.
    pub piece: Option<&'a str>,
    pub scale_label: &'a str,
    pub sheet: u32,
    pub total_sheets: u32,
}

pub fn render_title_block(
    scene: &mut Scene,
    x: f64,
    y: f64,
    w: f64,
    info: &TitleBlockInfo<'_>,
    layout: &TitleLayout,
) {
    let h = layout.height;
    let col1 = x + w * layout.col1_frac;
    let col2 = x + w * layout.col2_frac;

    scene.rect(x, y, w, h, Some(Color::Bg), Some(Stroke::solid(Color::Gold, 1.0)));
    let divider = Stroke::solid(Color::Gold, 0.5);
    scene.line(col1, y, col1, y + h, divider);
    scene.line(col2, y, col2, y + h, divider);
    scene.line(x, y + h / 2.0, col1, y + h / 2.0, divider);

    // Column 1: project, optionally the piece.
    scene.text(TextItem::new(x + 5.0, y + 10.0, "PROYECTO", 6.0, Color::Muted));
    scene.text(
        TextItem::new(x + 5.0, y + 21.0, ellipsize(info.project, 28), 9.0, Color::Label).bold(),
    );
    if let Some(piece) = info.piece {
        scene.text(TextItem::new(x + 5.0, y + h / 2.0 + 8.0, "PIEZA", 6.0, Color::Muted));
        scene.text(TextItem::new(
            x + 5.0,
            y + h / 2.0 + 18.0,
            ellipsize(piece, 28),
            8.0,
            Color::Dim,
        ));
    }

    // Column 2: scale and folio.
    scene.text(TextItem::new(col1 + 5.0, y + 9.0, "ESCALA", 6.0, Color::Muted));
    scene.text(TextItem::new(col1 + 5.0, y + 20.0, info.scale_label, 8.5, Color::Label).bold());
    scene.text(TextItem::new(col1 + 5.0, y + h / 2.0 + 8.0, "FOLIO", 6.0, Color::Muted));
    scene.text(TextItem::new(
        col1 + 5.0,
        y + h / 2.0 + 18.0,
        info.folio,
        7.5,
        Color::Dim,
    ));

    // Column 3: studio and sheet number.
    if !info.studio.is_empty() {
        scene.text(
            TextItem::new(col2 + 5.0, y + 9.0, ellipsize(info.studio, 22), 7.0, Color::Gold).bold(),
        );
    }
    scene.text(TextItem::new(col2 + 5.0, y + h / 2.0 + 8.0, "HOJA", 6.0, Color::Muted));
    scene.text(
        TextItem::new(
            col2 + 5.0,
            y + h / 2.0 + 18.0,
            format!("{}/{}", info.sheet, info.total_sheets),
            8.0,
            Color::Label,
        )
        .bold(),
    );
}
