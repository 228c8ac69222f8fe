use chrono::NaiveDate;
use planokit_core::model::{
    Axis, Dimension, DrawingModel, Drawings, Element, ElementKind, ProjectMeta, View,
};
use planokit_export::{dxf_file_name, export_dxf, write_dxf, DxfOptions};

fn options() -> DxfOptions {
    DxfOptions {
        date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
    }
}

fn element(name: &str, w: f64, h: f64) -> Element {
    Element {
        name: name.to_string(),
        x: 10.0,
        y: 10.0,
        width: w,
        height: h,
        kind: ElementKind::Panel,
    }
}

fn model(with_side: bool) -> DrawingModel {
    let front = View {
        total_width: 1200.0,
        total_height: 1800.0,
        elements: vec![element("Panel frontal", 1180.0, 880.0), element("Zocalo", 1180.0, 90.0)],
        dimensions: vec![
            Dimension {
                axis: Axis::Horizontal,
                from: 0.0,
                to: 1200.0,
                label: "1200".to_string(),
                description: None,
            },
            Dimension {
                axis: Axis::Vertical,
                from: 0.0,
                to: 1800.0,
                label: "1800".to_string(),
                description: None,
            },
        ],
    };
    let top = View {
        total_width: 1200.0,
        total_height: 500.0,
        elements: vec![element("Cubierta", 1180.0, 480.0)],
        dimensions: Vec::new(),
    };
    DrawingModel {
        project: ProjectMeta::new("Buro nocturno", "FD-0042").with_studio("Taller Norte"),
        drawings: Some(Drawings {
            scale_label: "1:10".to_string(),
            units_label: "mm".to_string(),
            front_view: Some(front),
            side_view: with_side.then(|| View {
                total_width: 500.0,
                total_height: 1800.0,
                ..View::default()
            }),
            top_view: Some(top),
            notes: vec!["Cantos con PVC 2mm".to_string()],
        }),
        ..DrawingModel::default()
    }
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn sections_are_balanced_and_file_terminates_with_eof() {
    let dxf = export_dxf(&model(true), &options());
    assert_eq!(count(&dxf, "\nSECTION"), 3);
    assert_eq!(count(&dxf, "\nENDSEC"), 3);
    assert!(dxf.ends_with("0\nEOF"));
}

#[test]
fn header_declares_decimal_millimeters() {
    let dxf = export_dxf(&model(true), &options());
    assert!(dxf.contains("$ACADVER\n1\nAC1015"));
    assert!(dxf.contains("$INSUNITS\n70\n4"));
    assert!(dxf.contains("$LUNITS\n70\n2"));
}

#[test]
fn layer_table_names_every_logical_group() {
    let dxf = export_dxf(&model(true), &options());
    for layer in ["FRONTAL", "LATERAL", "PLANTA", "COTAS", "TEXTO", "TITULO"] {
        assert!(dxf.contains(&format!("LAYER\n2\n{layer}")), "missing {layer}");
    }
}

#[test]
fn one_closed_polyline_per_rectangle() {
    // Front bound + 2 elements, side bound, top bound + 1 element, title
    // block: 7 rectangles.
    let dxf = export_dxf(&model(true), &options());
    assert_eq!(count(&dxf, "LWPOLYLINE"), 7);
    // All of them closed with 4 vertices.
    assert_eq!(count(&dxf, "LWPOLYLINE\n8\n"), 7);
    assert_eq!(count(&dxf, "70\n1\n90\n4"), 7);
}

#[test]
fn absent_view_contributes_no_entities() {
    let dxf = export_dxf(&model(false), &options());
    // Side bound dropped: 6 rectangles left, and no side caption.
    assert_eq!(count(&dxf, "LWPOLYLINE"), 6);
    assert!(!dxf.contains("VISTA LATERAL DERECHA"));
    assert!(dxf.contains("VISTA FRONTAL"));
    assert!(dxf.contains("VISTA SUPERIOR (PLANTA)"));
    assert!(dxf.ends_with("0\nEOF"));
}

#[test]
fn empty_model_still_produces_a_wellformed_document() {
    let empty = DrawingModel {
        project: ProjectMeta::new("", "SIN-FOLIO"),
        ..DrawingModel::default()
    };
    let dxf = export_dxf(&empty, &options());
    assert_eq!(count(&dxf, "\nSECTION"), 3);
    assert_eq!(count(&dxf, "\nENDSEC"), 3);
    assert!(dxf.ends_with("0\nEOF"));
    // Title block still present, with the project fallback.
    assert!(dxf.contains("PROYECTO"));
    assert!(dxf.contains("FOLIO: SIN-FOLIO"));
}

#[test]
fn title_block_carries_scale_units_and_date() {
    let dxf = export_dxf(&model(true), &options());
    assert!(dxf.contains("ESCALA: 1:10"));
    assert!(dxf.contains("UNIDADES: mm"));
    assert!(dxf.contains("14/03/2026"));
    assert!(dxf.contains("1. Cantos con PVC 2mm"));
}

#[test]
fn export_is_byte_deterministic() {
    let model = model(true);
    let opts = options();
    assert_eq!(export_dxf(&model, &opts), export_dxf(&model, &opts));
}

#[test]
fn dimension_labels_appear_on_the_dimension_layer() {
    let dxf = export_dxf(&model(true), &options());
    assert!(dxf.contains("COTAS\n10\n"));
    assert!(dxf.contains("\n1\n1200\n"));
    assert!(dxf.contains("\n1\n1800\n"));
}

#[test]
fn writes_file_named_after_the_folio() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dxf(&model(true), &options(), dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "FD-0042-planos.dxf");
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.ends_with("0\nEOF"));
}

#[test]
fn file_name_embeds_the_folio() {
    assert_eq!(dxf_file_name("FD-0042"), "FD-0042-planos.dxf");
}
