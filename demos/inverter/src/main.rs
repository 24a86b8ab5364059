//! A runnable example wiring the reference technology and reference sink
//! together to lay out a two-stage CMOS buffer (an input inverter stage
//! driving an output inverter stage). Not part of the `g2l` library — this
//! binary exists purely to exercise it end to end.

use g2l::{Error, Graph, Mosfet, Node, SolverConfig, Via, Wire};
use g2l_techdemo::{DemoSink, DemoTech, ACTIVE, CONTACT, METAL1, POLY};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let tech = DemoTech;
    let mut graph = Graph::new(&tech);

    // Input stage (columns 0-2): one NMOS at row 1, one PMOS at row 2.
    graph.add(Mosfet::new(Node::new(1, 1), Node::new(0, 1), Node::new(2, 1), 0.6, 0.13)?);
    graph.add(Mosfet::new(Node::new(1, 2), Node::new(0, 2), Node::new(2, 2), 0.9, 0.13)?);

    // Output stage (columns 4-6): one NMOS at row 1, one PMOS at row 2.
    graph.add(Mosfet::new(Node::new(5, 1), Node::new(4, 1), Node::new(6, 1), 0.6, 0.13)?);
    graph.add(Mosfet::new(Node::new(5, 2), Node::new(4, 2), Node::new(6, 2), 0.9, 0.13)?);

    // Power and ground rails, spanning exactly the columns that drop a
    // contact into them (a dangling rail end would leave that grid index
    // with no leading box of its own, and the solver would collapse it).
    graph.add(Wire::new(0.3, METAL1, Node::new(0, 0), Node::new(6, 0))?);
    graph.add(Wire::new(0.3, METAL1, Node::new(0, 3), Node::new(6, 3))?);

    // Contacts and stubs dropping each source down to its rail.
    for (sx, sy) in [(0, 1), (4, 1)] {
        graph.add(Via::new(Node::new(sx, sy), ACTIVE, CONTACT, METAL1));
        graph.add(Wire::new(0.2, METAL1, Node::new(sx, 0), Node::new(sx, sy))?);
    }
    for (sx, sy) in [(0, 2), (4, 2)] {
        graph.add(Via::new(Node::new(sx, sy), ACTIVE, CONTACT, METAL1));
        graph.add(Wire::new(0.2, METAL1, Node::new(sx, sy), Node::new(sx, 3))?);
    }

    // Drain contacts tying each stage's NMOS and PMOS drains into its output net.
    graph.add(Via::new(Node::new(2, 1), ACTIVE, CONTACT, METAL1));
    graph.add(Via::new(Node::new(2, 2), ACTIVE, CONTACT, METAL1));
    graph.add(Wire::new(0.2, METAL1, Node::new(2, 1), Node::new(2, 2))?);

    graph.add(Via::new(Node::new(6, 1), ACTIVE, CONTACT, METAL1));
    graph.add(Via::new(Node::new(6, 2), ACTIVE, CONTACT, METAL1));
    graph.add(Wire::new(0.2, METAL1, Node::new(6, 1), Node::new(6, 2))?);

    // Shared gate ties, and the route from the input stage's output to the
    // output stage's gate.
    graph.add(Wire::new(0.15, POLY, Node::new(1, 1), Node::new(1, 2))?);
    graph.add(Wire::new(0.15, POLY, Node::new(5, 1), Node::new(5, 2))?);
    graph.add(Via::new(Node::new(5, 1), POLY, CONTACT, METAL1));
    graph.add(Wire::new(0.2, METAL1, Node::new(2, 1), Node::new(5, 1))?);

    let config = SolverConfig::default();
    let (x_map, y_map, report) = g2l::solve(&graph, &config);
    println!(
        "solved in {} iteration(s), converged = {}",
        report.iterations, report.converged
    );

    let mut sink = DemoSink::new();
    g2l::produce(&graph, &x_map, &y_map, &mut sink, "inverter_chain")?;

    let total_shapes: usize = sink.cells.iter().map(|c| c.shapes.len()).sum();
    println!("emitted {total_shapes} shapes across {} cell(s)", sink.cells.len());
    for layer in [ACTIVE, POLY, CONTACT, METAL1] {
        println!("  layer {layer}: {} shape(s)", sink.shapes_on(layer).len());
    }

    Ok(())
}
