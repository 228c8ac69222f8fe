//! End-to-end pass over the public facade: untrusted JSON in, both export
//! formats out.

use planokit::{intake, DxfOptions, ProjectMeta};
use serde_json::json;

#[test]
fn full_pipeline_from_untrusted_json() {
    let drawings = json!({
        "scale": "1:10",
        "units": "mm",
        "frontView": {
            "totalWidth": 1200,
            "totalHeight": 1800,
            "elements": [
                {"name": "Panel superior", "x": 0, "y": 0, "width": 1200, "height": 300, "kind": "panel"},
                {"name": "Cajón central", "x": 100, "y": 400, "width": "1000", "height": 250, "kind": "cajones"}
            ],
            "dimensions": [
                {"axis": "horizontal", "from": 0, "to": 1200, "label": "1200", "description": "ancho total"},
                {"axis": "vertical", "from": 0, "to": 1800, "label": "1800"}
            ]
        },
        "topView": {"totalWidth": 1200, "totalHeight": "500"},
        "notes": ["Cantos de PVC", "Herrajes ocultos"]
    });
    let cut_list = json!([
        {"name": "Panel lateral izq", "quantity": 1, "length": 1800, "width": 500, "thickness": 18, "material": "MDF 18mm"},
        {"name": "Base inferior", "quantity": 1, "length": 1200, "width": 500, "thickness": 18, "material": "MDF 18mm"},
        {"name": "Cajón frontal", "quantity": 3, "length": 1000, "width": 250, "thickness": 16, "material": "Nogal"}
    ]);
    let details = json!({
        "pieceDetails": [
            {"piece": "Base inferior", "holes": [
                {"type": "ciego", "diameter": 8, "depth": 12, "x": 50, "y": 30, "description": "espiga"}
            ]}
        ],
        "crossSections": [
            {"id": "A1", "name": "Union base-lateral", "scale": "1:2",
             "elements": [{"name": "Base", "x": 0, "y": 60, "width": 120, "height": 18, "kind": "base"}],
             "dimensions": [{"axis": "horizontal", "from": 0, "to": 120, "label": "120"}]}
        ],
        "constructionDetails": []
    });

    let project = ProjectMeta::new("Buro nocturno", "FD-0042").with_studio("Taller Norte");
    let model = intake::model_from_parts(
        project,
        Some(&drawings),
        Some(&cut_list),
        Some(&details),
    );

    assert!(model.validate().is_ok());
    assert!(model.has_assembly());
    assert!(model.has_breakdown());
    assert!(model.has_details());
    assert_eq!(model.sheet_count(), 3);

    let svg = planokit::export_svg(&model);
    assert!(svg.contains("VISTA FRONTAL"));
    assert!(svg.contains("Cajón central"));
    assert!(svg.contains("ancho total"));
    assert_eq!(svg, planokit::export_svg(&model));

    let opts = DxfOptions {
        date: chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
    };
    let dxf = planokit::export_dxf(&model, &opts);
    assert!(dxf.contains("VISTA FRONTAL"));
    assert!(!dxf.contains("VISTA LATERAL DERECHA"));
    assert!(dxf.ends_with("0\nEOF"));
    assert_eq!(dxf, planokit::export_dxf(&model, &opts));

    // The two serializers are independent: an absent section affects each in
    // isolation and neither panics on the partial model.
    assert_eq!(
        planokit::drawing_file_name(&model.project.folio),
        "FD-0042-planos.svg"
    );
    assert_eq!(
        planokit::dxf_file_name(&model.project.folio),
        "FD-0042-planos.dxf"
    );
}
