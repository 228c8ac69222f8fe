use planokit_core::model::{DrawingModel, Drawings, Element, ElementKind, Piece, ProjectMeta, View};
use planokit_export::{drawing_file_name, export_svg, scene_to_svg, write_svg};
use planokit_drafting::Scene;
use planokit_drafting::scene::{Color, TextItem};

fn model() -> DrawingModel {
    DrawingModel {
        project: ProjectMeta::new("Mueble TV & consola", "FD-0042"),
        drawings: Some(Drawings {
            scale_label: "1:10".to_string(),
            units_label: "mm".to_string(),
            front_view: Some(View {
                total_width: 1800.0,
                total_height: 450.0,
                elements: vec![Element {
                    name: "Rep <flotante>".to_string(),
                    x: 0.0,
                    y: 0.0,
                    width: 1800.0,
                    height: 200.0,
                    kind: ElementKind::Panel,
                }],
                dimensions: Vec::new(),
            }),
            side_view: None,
            top_view: None,
            notes: Vec::new(),
        }),
        pieces: vec![Piece {
            name: "Costado".to_string(),
            quantity: 2,
            length: 450.0,
            width: 400.0,
            thickness: 18.0,
            material: "Nogal".to_string(),
            note: None,
        }],
        ..DrawingModel::default()
    }
}

#[test]
fn document_is_wellformed_markup() {
    let svg = export_svg(&model());
    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert_eq!(svg.matches("<svg").count(), 1);
    assert_eq!(svg.matches("</svg>").count(), 1);
    assert_eq!(svg.matches("<text").count(), svg.matches("</text>").count());
    assert_eq!(svg.matches("<defs>").count(), svg.matches("</defs>").count());
}

#[test]
fn text_content_is_xml_escaped() {
    let svg = export_svg(&model());
    // Element and project names carry markup-hostile characters.
    assert!(svg.contains("Rep &lt;flotante&gt;"));
    assert!(svg.contains("Mueble TV &amp; consola"));
    assert!(!svg.contains("<flotante>"));
}

#[test]
fn export_is_byte_deterministic() {
    let model = model();
    assert_eq!(export_svg(&model), export_svg(&model));
}

#[test]
fn sheets_are_stacked_in_one_document() {
    // Assembly (440 high) + breakdown stacked below: total height grows.
    let svg = export_svg(&model());
    let height_attr = svg
        .split("height=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap();
    let height: f64 = height_attr.parse().unwrap();
    assert!(height > 440.0, "stacked document height was {height}");
}

#[test]
fn empty_model_still_yields_a_document() {
    let empty = DrawingModel {
        project: ProjectMeta::new("Vacio", "FD-0000"),
        ..DrawingModel::default()
    };
    let svg = export_svg(&empty);
    assert!(svg.contains("<svg"));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn scene_serializer_honors_colors_and_rotation() {
    let mut scene = Scene::new(100.0, 100.0);
    scene.text(
        TextItem::new(50.0, 50.0, "1800", 7.5, Color::Dim)
            .bold()
            .rotated(-90.0, 50.0, 50.0),
    );
    let svg = scene_to_svg(&scene);
    assert!(svg.contains("fill=\"#58A6FF\""));
    assert!(svg.contains("font-weight=\"700\""));
    assert!(svg.contains("transform=\"rotate(-90 50 50)\""));
}

#[test]
fn writes_file_named_after_the_folio() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_svg(&model(), dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "FD-0042-planos.svg");
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.ends_with("</svg>\n"));
}

#[test]
fn file_name_embeds_the_folio() {
    assert_eq!(drawing_file_name("FD-0042"), "FD-0042-planos.svg");
}
