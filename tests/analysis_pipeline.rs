//! End-to-end pipeline tests: binning registry through histogram book to
//! rendered output, and training plan through weights files to evaluated
//! regression outputs.

#![allow(clippy::unwrap_used)]

use recuento::model::{LinearWeights, MethodWeights, ModelKind};
use recuento::prelude::*;
use recuento::style::{FillPattern, MarkerShape};

/// Deterministic pseudo-data: a triangular-ish bump over [0, 10).
fn sample_values() -> Vec<f64> {
    let mut values = Vec::new();
    for i in 0..500u32 {
        let x = f64::from(i % 100) / 10.0;
        let weight = 5.0 - (x - 5.0).abs();
        if f64::from(i % 10) < weight * 2.0 {
            values.push(x);
        }
    }
    values
}

#[test]
fn histogram_book_fills_and_exports() {
    let mut registry = BinRegistry::with_defaults();
    registry
        .add("pt", Binning::uniform(20, 0.0, 10.0).unwrap())
        .unwrap();

    let mut book: HistBook<CellIndex<1>> = HistBook::with_weighted(true);
    book.set_indices(vec![CellIndex([0]), CellIndex([1])]);
    book.register_1d(
        HistSpec::new("h_pt")
            .with_title("Transverse momentum")
            .with_axis_titles(&["p_T [GeV]", "counts"])
            .with_bins(Axis::X, registry.get("pt").unwrap().clone()),
    );
    book.generate().unwrap();

    for (i, value) in sample_values().into_iter().enumerate() {
        let cell = CellIndex([i % 2]);
        book.fill_1d(&cell, "h_pt", value).unwrap();
    }

    let low = book.get_1d(&CellIndex([0]), "h_pt").unwrap();
    let high = book.get_1d(&CellIndex([1]), "h_pt").unwrap();
    assert!(low.integral() > 0.0);
    assert!(high.integral() > 0.0);
    assert_eq!(low.name(), "h_pt_0");

    let dir = tempfile::tempdir().unwrap();
    book.save_svg(dir.path()).unwrap();
    assert!(dir.path().join("h_pt_0.svg").exists());
    assert!(dir.path().join("h_pt_1.svg").exists());
}

#[test]
fn canvas_composes_hist_graph_legend() {
    let binning = Binning::uniform(20, 0.0, 10.0).unwrap();
    let mut hist = HistSpec::new("h_pt")
        .with_title("Spectrum")
        .with_axis_titles(&["p_T [GeV]", "counts"])
        .with_bins(Axis::X, binning)
        .build_1d()
        .unwrap();
    for value in sample_values() {
        hist.fill(value);
    }

    let graph = GraphSpec::from_hist1d(&hist, "g_pt");
    assert_eq!(graph.len(), 20);

    let palette = Palette::series();
    let hist_style = PlotStyle::from_color(Rgba::BLUE).with_fill(FillStyle {
        color: Rgba::BLUE,
        pattern: FillPattern::Solid,
    });
    let mut graph_style = PlotStyle::from_color(palette.color(1));
    graph_style.marker.shape = MarkerShape::FilledCircle;

    let mut canvas = Canvas::single("c_pt", 640, 480).unwrap().with_title("Fill check");
    {
        let pad = canvas.pad_mut(0).unwrap();
        pad.draw_hist(hist, hist_style.clone(), HistDrawMode::Bars);
        pad.draw_graph(graph, graph_style.clone(), GraphDrawMode::Points);

        let mut legend = Legend::new(Vertices::new(0.62, 0.7, 0.93, 0.9).unwrap());
        legend.add_entry("histogram", hist_style);
        legend.add_entry("bin points", graph_style);
        pad.draw_legend(legend);

        pad.draw_text(TextBox::with_lines(
            Vertices::new(0.15, 0.78, 0.45, 0.9).unwrap(),
            &["pseudo-data", "500 draws"],
        ));
    }

    let surface = canvas.render().unwrap();
    assert_eq!(surface.width(), 640);
    let painted = (0..480u32)
        .flat_map(|y| (0..640u32).map(move |x| (x, y)))
        .filter(|&(x, y)| surface.pixel(x, y) != Some(Rgba::WHITE))
        .count();
    assert!(painted > 1000, "canvas should not be blank, painted {painted}");

    let svg = canvas.render_svg().unwrap().render();
    assert!(svg.contains("Fill check"));
    assert!(svg.contains("histogram"));
    assert!(svg.contains("pseudo-data"));
    assert!(svg.contains("p_T [GeV]"));

    let dir = tempfile::tempdir().unwrap();
    canvas.save_png(dir.path().join("c_pt.png")).unwrap();
    canvas.save_svg(dir.path().join("c_pt.svg")).unwrap();
    assert!(dir.path().join("c_pt.png").exists());
}

#[test]
fn binning_roundtrip_through_graph_points() {
    let binning = Binning::from_edges(vec![0.0, 1.0, 2.5, 5.0, 10.0]).unwrap();
    let mut hist = HistSpec::new("h")
        .with_bins(Axis::X, binning.clone())
        .build_1d()
        .unwrap();
    hist.fill(0.5);
    hist.fill(3.0);

    let graph = GraphSpec::from_hist1d(&hist, "g");
    let recovered = Binning::from_points(graph.points(), Axis::X).unwrap();
    assert_eq!(recovered.num(), binning.num());
    for (a, b) in recovered.edges().iter().zip(binning.edges()) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn train_export_read_evaluate() {
    let params = ModelParameters {
        variables: vec![
            (VariableRole::Train, "pt".to_string()),
            (VariableRole::Train, "eta".to_string()),
            (VariableRole::Target, "energy".to_string()),
            (VariableRole::Watch, "event".to_string()),
        ],
        methods: vec![
            ("LD".to_string(), "V".to_string()),
            ("MLP".to_string(), "HiddenLayers=8".to_string()),
        ],
        factory_options: vec!["Silent".to_string()],
        training_options: vec!["SplitMode=Random".to_string()],
        add_spectators: true,
        ..ModelParameters::default()
    };

    let trainer = Trainer::new(&params);
    let plan = trainer.training_plan().unwrap();
    assert_eq!(plan.methods[0].kind, ModelKind::LinearDiscriminant);
    assert_eq!(plan.methods[1].kind, ModelKind::Perceptron);
    assert_eq!(plan.spectators, ["event".to_string()]);

    // Export weights for one method only; the other stays unbooked.
    let dir = tempfile::tempdir().unwrap();
    let bundle = MethodWeights::new(vec![LinearWeights::new(vec![3.0, -1.0], 0.5)]);
    trainer
        .export_weights(dir.path(), "calib", "LD", &bundle)
        .unwrap();

    let mut reader = Reader::new(&params);
    assert_eq!(
        reader.outputs(),
        [
            "energy".to_string(),
            "energy_LD".to_string(),
            "energy_MLP".to_string(),
        ]
    );
    assert_eq!(reader.book_weights_dir(dir.path(), "calib").unwrap(), 1);

    let mut row = RowBuffer::new(&[
        "pt".to_string(),
        "eta".to_string(),
        "energy".to_string(),
        "event".to_string(),
    ]);
    row.set("pt", 4.0).unwrap();
    row.set("eta", 2.0).unwrap();
    row.set("energy", 10.0).unwrap();
    row.set("event", 1.0).unwrap();

    reader.evaluate(&row).unwrap();
    assert!((reader.output("energy_LD").unwrap() - 10.5).abs() < 1e-6);
    assert!((reader.output("energy").unwrap() - 10.0).abs() < 1e-6);
    assert_eq!(reader.output("energy_MLP").unwrap(), recuento::model::UNSET);
}

#[test]
fn registry_feeds_specs_across_dimensions() {
    let registry = BinRegistry::with_defaults();
    let spec = HistSpec::new("h_eta_phi").with_axis_bins(&[
        registry.get("eta").unwrap().clone(),
        registry.get("phi").unwrap().clone(),
    ]);

    let mut hist = spec.build_2d().unwrap();
    hist.fill(0.0, 0.0);
    hist.fill(0.0, 3.0);
    hist.fill(99.0, 99.0);
    assert!((hist.integral() - 2.0).abs() < 1e-12);
    assert!((hist.outside() - 1.0).abs() < 1e-12);
}
