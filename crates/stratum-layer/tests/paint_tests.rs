//! Tests for paint ordering, floats, replaced content, and fixed re-anchoring.

use stratum_box::{
    BoxOffsets, BoxTreeError, ListMarker, PositionType, ReplacedContent, TextRun,
};
use stratum_layer::{
    BoxId, BoxStyle, BoxTree, DisplayCommand, DisplayList, DisplayListCanvas, FlowCollector,
    LayerError, LayerId, LayerPainter, LayerTree, LayoutBox, PaintOptions, Rect,
    RenderingContext,
};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

fn summary(list: &DisplayList) -> Vec<(&'static str, BoxId)> {
    list.commands()
        .iter()
        .map(|command| {
            let kind = match command {
                DisplayCommand::Background { .. } => "bg",
                DisplayCommand::Border { .. } => "border",
                DisplayCommand::DebugOutline { .. } => "outline",
                DisplayCommand::ListMarker { .. } => "marker",
                DisplayCommand::Text { .. } => "text",
                DisplayCommand::Component { .. } => "component",
            };
            (kind, command.box_id())
        })
        .collect()
}

fn paint_with(
    layers: &LayerTree,
    boxes: &mut BoxTree,
    layer: LayerId,
    options: PaintOptions,
    fixed_rectangle: Rect,
) -> Result<DisplayList, LayerError> {
    let mut canvas = DisplayListCanvas::new(VIEWPORT);
    let mut ctx = RenderingContext::new(&mut canvas, fixed_rectangle).with_options(options);
    LayerPainter::new(layers, &FlowCollector).paint(&mut ctx, boxes, layer, 0.0, 0.0)?;
    Ok(canvas.into_display_list())
}

fn paint(layers: &LayerTree, boxes: &mut BoxTree, layer: LayerId) -> DisplayList {
    paint_with(layers, boxes, layer, PaintOptions::default(), VIEWPORT).unwrap()
}

fn child_block(boxes: &mut BoxTree, parent: BoxId, style: BoxStyle, rect: Rect) -> BoxId {
    let id = boxes.alloc(LayoutBox::block(style).at(rect.x, rect.y, rect.width, rect.height));
    boxes.append_child(parent, id).unwrap();
    id
}

fn child_float(boxes: &mut BoxTree, parent: BoxId, rect: Rect) -> BoxId {
    let id = boxes.alloc(
        LayoutBox::floated(BoxStyle::block()).at(rect.x, rect.y, rect.width, rect.height),
    );
    boxes.append_child(parent, id).unwrap();
    id
}

fn replaced_block(boxes: &mut BoxTree, parent: BoxId, source: &str) -> BoxId {
    let id = child_block(boxes, parent, BoxStyle::block(), Rect::new(0.0, 400.0, 64.0, 64.0));
    boxes
        .get_mut(id)
        .unwrap()
        .block_data_mut()
        .unwrap()
        .replaced = Some(ReplacedContent {
        source: source.to_string(),
    });
    id
}

fn relative(z_index: Option<i32>) -> BoxStyle {
    let style = BoxStyle::block().with_position(PositionType::Relative);
    z_index.map_or(style, |z| style.with_z_index(z))
}

fn html(boxes: &mut BoxTree) -> BoxId {
    boxes.alloc(LayoutBox::block(BoxStyle::block()).at(0.0, 0.0, 800.0, 600.0))
}

// ========== painting order ==========

#[test]
fn test_full_painting_order() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let neg = child_block(&mut boxes, html, relative(Some(-1)), Rect::new(10.0, 10.0, 50.0, 50.0));
    let div = child_block(&mut boxes, html, BoxStyle::block(), Rect::new(0.0, 0.0, 800.0, 100.0));
    let li = child_block(&mut boxes, div, BoxStyle::block(), Rect::new(0.0, 100.0, 800.0, 20.0));
    boxes.get_mut(li).unwrap().block_data_mut().unwrap().list_marker = Some(ListMarker {
        text: "1.".to_string(),
    });
    let span = boxes.alloc(LayoutBox::inline(BoxStyle::inline()).at(20.0, 200.0, 30.0, 12.0));
    boxes.append_child(html, span).unwrap();
    boxes
        .append_text(
            span,
            TextRun {
                text: "hello".to_string(),
                bounds: Rect::new(0.0, 0.0, 30.0, 12.0),
            },
        )
        .unwrap();
    let f1 = child_float(&mut boxes, html, Rect::new(0.0, 300.0, 40.0, 40.0));
    let f2 = child_float(&mut boxes, html, Rect::new(700.0, 300.0, 40.0, 40.0));
    let img = replaced_block(&mut boxes, html, "logo.png");
    let auto = child_block(&mut boxes, html, relative(None), Rect::new(0.0, 500.0, 10.0, 10.0));
    let pos = child_block(&mut boxes, html, relative(Some(5)), Rect::new(0.0, 520.0, 10.0, 10.0));
    let zero = child_block(&mut boxes, html, relative(Some(0)), Rect::new(0.0, 540.0, 10.0, 10.0));

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();
    for master in [neg, auto, pos, zero] {
        let _ = layers.create_child(&mut boxes, master, root).unwrap();
    }
    layers.add_float(&mut boxes, root, f1).unwrap();
    layers.add_float(&mut boxes, root, f2).unwrap();

    let list = paint(&layers, &mut boxes, root);

    assert_eq!(
        summary(&list),
        vec![
            ("bg", html),
            ("border", html),
            // negative z-index
            ("bg", neg),
            ("border", neg),
            // in-flow blocks
            ("bg", div),
            ("border", div),
            ("bg", li),
            ("border", li),
            ("bg", img),
            ("border", img),
            // floats, last attached first
            ("bg", f2),
            ("border", f2),
            ("bg", f1),
            ("border", f1),
            ("marker", li),
            ("text", span),
            ("component", img),
            // auto, then zero, then positive
            ("bg", auto),
            ("border", auto),
            ("bg", zero),
            ("border", zero),
            ("bg", pos),
            ("border", pos),
        ]
    );

    match &list.commands()[15] {
        DisplayCommand::Text { text, rect, .. } => {
            assert_eq!(text, "hello");
            assert_eq!(*rect, Rect::new(20.0, 200.0, 30.0, 12.0));
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn test_nested_stacking_context_paints_its_own_negatives_after_background() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let outer = child_block(&mut boxes, html, relative(Some(1)), Rect::new(0.0, 0.0, 100.0, 100.0));
    let inner = child_block(&mut boxes, outer, relative(Some(-7)), Rect::new(0.0, 0.0, 10.0, 10.0));
    let sibling = child_block(&mut boxes, html, relative(Some(-2)), Rect::new(0.0, 0.0, 10.0, 10.0));

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();
    let outer_layer = layers.create_child(&mut boxes, outer, root).unwrap();
    let _ = layers.create_child(&mut boxes, inner, outer_layer).unwrap();
    let _ = layers.create_child(&mut boxes, sibling, root).unwrap();

    let order: Vec<BoxId> = summary(&paint(&layers, &mut boxes, root))
        .into_iter()
        .filter(|(kind, _)| *kind == "bg")
        .map(|(_, id)| id)
        .collect();

    // inner (-7) is confined to outer (+1), so it paints after sibling (-2).
    assert_eq!(order, vec![html, sibling, outer, inner]);
}

#[test]
fn test_content_outside_clip_is_skipped() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let visible = child_block(&mut boxes, html, BoxStyle::block(), Rect::new(0.0, 0.0, 10.0, 10.0));
    let offscreen =
        child_block(&mut boxes, html, BoxStyle::block(), Rect::new(0.0, 900.0, 10.0, 10.0));
    let nested = child_block(&mut boxes, offscreen, BoxStyle::block(), Rect::new(0.0, 10.0, 5.0, 5.0));

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();

    let painted: Vec<BoxId> = summary(&paint(&layers, &mut boxes, root))
        .into_iter()
        .map(|(_, id)| id)
        .collect();

    assert!(painted.contains(&visible));
    assert!(!painted.contains(&offscreen));
    // Children of culled boxes are still visited.
    assert!(painted.contains(&nested));
}

#[test]
fn test_inline_layer_paints_no_background_of_its_own() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let span = boxes.alloc(
        LayoutBox::inline(BoxStyle::inline().with_position(PositionType::Relative))
            .at(5.0, 5.0, 20.0, 10.0),
    );
    boxes.append_child(html, span).unwrap();
    boxes
        .append_text(
            span,
            TextRun {
                text: "moved".to_string(),
                bounds: Rect::new(0.0, 0.0, 20.0, 10.0),
            },
        )
        .unwrap();

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();
    let _ = layers.create_child(&mut boxes, span, root).unwrap();

    assert_eq!(
        summary(&paint(&layers, &mut boxes, root)),
        vec![("bg", html), ("border", html), ("text", span)]
    );
}

// ========== floats ==========

#[test]
fn test_floats_paint_last_added_first() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let f1 = child_float(&mut boxes, html, Rect::new(0.0, 0.0, 10.0, 10.0));
    let f2 = child_float(&mut boxes, html, Rect::new(20.0, 0.0, 10.0, 10.0));

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();
    layers.add_float(&mut boxes, root, f1).unwrap();
    layers.add_float(&mut boxes, root, f2).unwrap();

    let floats: Vec<BoxId> = summary(&paint(&layers, &mut boxes, root))
        .into_iter()
        .filter(|&(kind, id)| kind == "bg" && id != html)
        .map(|(_, id)| id)
        .collect();

    assert_eq!(floats, vec![f2, f1]);
}

#[test]
fn test_paint_as_layer_includes_the_float_subtree() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let float = child_float(&mut boxes, html, Rect::new(0.0, 0.0, 100.0, 100.0));
    let inside = child_block(&mut boxes, float, BoxStyle::block(), Rect::new(0.0, 0.0, 50.0, 20.0));

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();

    let mut canvas = DisplayListCanvas::new(VIEWPORT);
    let mut ctx = RenderingContext::new(&mut canvas, VIEWPORT);
    LayerPainter::new(&layers, &FlowCollector)
        .paint_as_layer(&mut ctx, &boxes, root, float)
        .unwrap();

    assert_eq!(
        summary(canvas.display_list()),
        vec![
            ("bg", float),
            ("border", float),
            ("bg", inside),
            ("border", inside)
        ]
    );
}

// ========== replaced content ==========

#[test]
fn test_replaced_master_paints_only_its_widget() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let img = replaced_block(&mut boxes, html, "video.webm");
    boxes.get_mut(img).unwrap().style = Some(relative(Some(2)));
    let caption = child_block(&mut boxes, img, BoxStyle::block(), Rect::new(0.0, 0.0, 5.0, 5.0));

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();
    let img_layer = layers.create_child(&mut boxes, img, root).unwrap();

    let list = paint(&layers, &mut boxes, img_layer);
    assert_eq!(summary(&list), vec![("component", img)]);
    assert!(!summary(&list).iter().any(|&(_, id)| id == caption));
}

#[test]
fn test_interactive_mode_suppresses_widgets() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let img = replaced_block(&mut boxes, html, "logo.png");

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();

    let interactive = PaintOptions {
        interactive: true,
        ..PaintOptions::default()
    };
    let list = paint_with(&layers, &mut boxes, root, interactive, VIEWPORT).unwrap();

    assert_eq!(
        summary(&list),
        vec![("bg", html), ("border", html), ("bg", img), ("border", img)]
    );
}

// ========== options ==========

#[test]
fn test_debug_outlines_follow_each_block() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let div = child_block(&mut boxes, html, BoxStyle::block(), Rect::new(0.0, 0.0, 10.0, 10.0));

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();

    let debug = PaintOptions {
        debug_draw_boxes: true,
        ..PaintOptions::default()
    };
    let list = paint_with(&layers, &mut boxes, root, debug, VIEWPORT).unwrap();

    assert_eq!(
        summary(&list),
        vec![
            ("bg", html),
            ("border", html),
            ("outline", html),
            ("bg", div),
            ("border", div),
            ("outline", div)
        ]
    );
}

#[test]
fn test_paint_options_from_json() {
    let options: PaintOptions = serde_json::from_str(r#"{ "debug_draw_boxes": true }"#).unwrap();
    assert!(options.debug_draw_boxes);
    assert!(!options.interactive);
}

// ========== fixed positioning ==========

#[test]
fn test_fixed_layer_is_reanchored_to_viewport() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let style = BoxStyle::block()
        .with_position(PositionType::Fixed)
        .with_offsets(BoxOffsets::top_left(5.0, 5.0));
    let banner = child_block(&mut boxes, html, style, Rect::new(0.0, 0.0, 100.0, 20.0));
    let label = child_block(&mut boxes, banner, BoxStyle::block(), Rect::new(0.0, 0.0, 10.0, 10.0));

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();
    let _ = layers.create_child(&mut boxes, banner, root).unwrap();

    // Scrolled down by 300.
    let scrolled = Rect::new(0.0, 300.0, 800.0, 600.0);
    let mut canvas = DisplayListCanvas::new(Rect::new(0.0, 0.0, 800.0, 1200.0));
    let mut ctx = RenderingContext::new(&mut canvas, scrolled);
    LayerPainter::new(&layers, &FlowCollector)
        .paint(&mut ctx, &mut boxes, root, 0.0, 0.0)
        .unwrap();

    let banner_box = boxes.get(banner).unwrap();
    assert_eq!(banner_box.containing_block, Some(Rect::new(-1.0, 299.0, 800.0, 600.0)));
    assert_eq!((banner_box.abs_x, banner_box.abs_y), (4.0, 304.0));
    assert_eq!(
        (boxes.get(label).unwrap().abs_x, boxes.get(label).unwrap().abs_y),
        (4.0, 304.0)
    );

    let painted = canvas
        .display_list()
        .commands()
        .iter()
        .find(|command| command.box_id() == banner)
        .cloned();
    assert_eq!(
        painted,
        Some(DisplayCommand::Background {
            box_id: banner,
            rect: Rect::new(4.0, 304.0, 100.0, 20.0),
        })
    );
}

// ========== errors ==========

#[test]
fn test_unresolved_style_aborts_paint() {
    let mut boxes = BoxTree::new();
    let html = html(&mut boxes);
    let div = child_block(&mut boxes, html, relative(None), Rect::new(0.0, 0.0, 10.0, 10.0));

    let layers = LayerTree::new();
    let root = layers.create(&mut boxes, html, None).unwrap();
    let _ = layers.create_child(&mut boxes, div, root).unwrap();
    boxes.get_mut(div).unwrap().style = None;

    assert_eq!(
        paint_with(&layers, &mut boxes, root, PaintOptions::default(), VIEWPORT).unwrap_err(),
        LayerError::Box(BoxTreeError::UnresolvedStyle(div))
    );
}

#[test]
fn test_unknown_layer_is_an_error() {
    let mut boxes = BoxTree::new();
    let layers = LayerTree::new();

    assert_eq!(
        paint_with(&layers, &mut boxes, LayerId(0), PaintOptions::default(), VIEWPORT)
            .unwrap_err(),
        LayerError::UnknownLayer(LayerId(0))
    );
}
