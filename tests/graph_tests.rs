use anyhow::Result;
use arcgraph::{Bfs, Dfs, Dijkstra, Graph, GraphError, LazyPrim, Weight, DEFAULT_CHANNEL};

fn numbered(directed: bool, n: u32) -> Graph<u32, String> {
    let mut g = Graph::with_capacity(directed, n as usize);
    for i in 0..n {
        g.add_vertex(i, format!("v{i}"));
    }
    g
}

fn six_vertex_graph() -> Result<Graph<u32, String>> {
    let mut g = numbered(false, 6);
    for (a, b, w) in [
        (0, 1, 2.0),
        (0, 2, 3.0),
        (1, 3, 5.0),
        (1, 4, 2.0),
        (3, 4, 1.0),
        (3, 5, 2.0),
        (4, 5, 4.0),
    ] {
        g.add_weighted_edge(a, b, w)?;
    }
    Ok(g)
}

#[test]
fn test_six_vertex_dijkstra() -> Result<()> {
    let g = six_vertex_graph()?;
    assert_eq!(g.edge_count(), 7);

    let sp = Dijkstra::new(&g, &0, DEFAULT_CHANNEL)?;
    assert_eq!(sp.dist_to(&2), 3.0);
    assert_eq!(sp.path_to(&2), Some(vec![0, 2]));
    assert_eq!(sp.dist_to(&5), 7.0);

    let path = sp.path_to(&5).unwrap_or_default();
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&5));
    let cost: f64 = path
        .windows(2)
        .map(|w| g.get_weight(&w[0], &w[1], DEFAULT_CHANNEL))
        .collect::<Result<Vec<_>, GraphError>>()?
        .into_iter()
        .map(Option::unwrap_or_default)
        .sum();
    assert_eq!(cost, 7.0);
    Ok(())
}

#[test]
fn test_six_vertex_mst() -> Result<()> {
    let g = six_vertex_graph()?;
    let mst = LazyPrim::new(&g, DEFAULT_CHANNEL);
    assert_eq!(mst.len(), g.vertex_count() - 1);
    // 3-4 (1), 0-1 (2), 1-4 (2), 3-5 (2), 0-2 (3)
    assert_eq!(mst.total_weight(), 10.0);

    let tree = mst.to_graph();
    assert!(!tree.is_directed());
    assert_eq!(tree.edge_count(), 5);
    assert_eq!(tree.components(), 1);
    Ok(())
}

#[test]
fn test_directed_triangle_cycle() -> Result<()> {
    let mut g = numbered(true, 4);
    g.add_edge(1, 2)?;
    g.add_edge(2, 3)?;
    g.add_edge(3, 1)?;
    assert!(g.is_in_cycle(&1)?);
    assert!(!g.is_in_cycle(&0)?);

    let undirected = g.rebuild(false);
    assert!(matches!(
        undirected.is_in_cycle(&1),
        Err(GraphError::InvalidOperation(_))
    ));
    Ok(())
}

#[test]
fn test_remove_edge_decrements_count() -> Result<()> {
    let mut g = numbered(true, 4);
    g.add_edge(1, 2)?;
    g.add_edge(2, 3)?;
    g.add_edge(0, 1)?;
    let k = g.edge_count();

    assert!(g.remove_edge(&1, &2).is_some());
    assert_eq!(g.edge_count(), k - 1);
    assert!(g.get_edge(&1, &2).is_none());
    Ok(())
}

#[test]
fn test_remove_vertex_clears_incoming() -> Result<()> {
    let mut g = six_vertex_graph()?;
    assert!(g.exists(&4));
    let removed = g.remove_vertex(&4).map(|v| v.element().clone());
    assert_eq!(removed.as_deref(), Some("v4"));
    assert!(!g.exists(&4));
    assert!(g.vertices().all(|v| v.edge_to(&4).is_none()));
    assert_eq!(g.vertex_count(), 5);
    // 1-4, 3-4 and 4-5 are gone.
    assert_eq!(g.edge_count(), 4);
    Ok(())
}

#[test]
fn test_paths_and_components() -> Result<()> {
    let mut g = numbered(false, 5);
    g.add_edge(0, 1)?;
    g.add_edge(1, 2)?;
    g.add_edge(3, 4)?;

    assert_eq!(g.components(), 2);
    assert!(g.has_path(&0, &2)?);
    assert!(!g.has_path(&0, &4)?);
    assert_eq!(g.path(&0, &2)?, Some(vec![0, 1, 2]));
    assert_eq!(g.path(&0, &3)?, None);
    assert!(g.has_path(&7, &0).is_err());
    Ok(())
}

#[test]
fn test_topological_order_of_dag() -> Result<()> {
    let mut g = numbered(true, 6);
    for (a, b) in [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)] {
        g.add_edge(a, b)?;
    }
    let order = g.topological_order();
    assert_eq!(order.len(), 6);
    for v in g.vertices() {
        let from = order.iter().position(|x| x == v.id());
        for e in v.edges() {
            let to = order.iter().position(|x| x == e.to());
            assert!(from < to, "{} must precede {}", v.id(), e.to());
        }
    }
    let elements = g.topological_order_elements();
    assert_eq!(elements.len(), 6);
    Ok(())
}

#[test]
fn test_bfs_and_dfs_agree_on_reachability() -> Result<()> {
    let g = six_vertex_graph()?;
    let bfs = Bfs::new(&g, &0)?;
    let dfs = Dfs::from_start(&g, &0)?;
    for id in g.ids() {
        assert_eq!(bfs.is_visited(id), dfs.is_visited(id));
    }
    // Hop distance 0 -> 5 is three arcs.
    assert_eq!(bfs.path_to(&5).map(|p| p.len()), Some(4));
    Ok(())
}

#[test]
fn test_named_channels() -> Result<()> {
    let mut g = numbered(true, 3);
    g.add_edge_with_weights(
        0,
        1,
        false,
        vec![Weight::new("time", 10.0), Weight::new("cost", 1.0)],
        Vec::new(),
        None::<()>,
    )?;
    g.add_edge_with_weights(
        1,
        2,
        false,
        vec![Weight::new("time", 1.0)],
        Vec::new(),
        None,
    )?;
    g.add_edge_with_weights(
        0,
        2,
        false,
        vec![Weight::new("time", 20.0), Weight::new("cost", 9.0)],
        Vec::new(),
        None,
    )?;

    let by_time = Dijkstra::new(&g, &0, "time")?;
    assert_eq!(by_time.dist_to(&2), 11.0);
    let by_cost = Dijkstra::new(&g, &0, "cost")?;
    assert_eq!(by_cost.dist_to(&2), 9.0);
    assert_eq!(by_cost.path_to(&2), Some(vec![0, 2]));

    assert_eq!(g.remove_weight(&0, &1, "cost")?, Some(1.0));
    assert_eq!(g.get_weight(&0, &1, "cost")?, None);
    Ok(())
}

#[test]
fn test_missing_vertices_fail_fast() {
    let mut g = numbered(true, 2);
    assert!(matches!(g.add_edge(0, 5), Err(GraphError::VertexNotFound(_))));
    assert!(matches!(Bfs::new(&g, &5), Err(GraphError::VertexNotFound(_))));
    assert!(matches!(
        Dijkstra::new(&g, &5, DEFAULT_CHANNEL),
        Err(GraphError::VertexNotFound(_))
    ));
    assert!(g.remove_vertex(&5).is_none());
    assert!(g.remove_edge(&0, &1).is_none());
}

#[test]
fn test_display_is_deterministic() -> Result<()> {
    let g = six_vertex_graph()?;
    let copy = g.clone();
    assert_eq!(g.to_string(), copy.to_string());
    assert_eq!(g.to_string().lines().count(), 6);
    assert!(g.display_elements().lines().all(|l| l.starts_with('v')));
    Ok(())
}
