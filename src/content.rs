//! Built-in deck: switching techniques in communication networks.

use crate::slide::Slide;

pub const BUILTIN_NAME: &str = "Switching Techniques";

type SlideSource = (&'static str, &'static str, &'static [&'static str]);

const SLIDES: &[SlideSource] = &[
    (
        "Presentation Roadmap",
        "Switching enables communication networks to route information efficiently. This session reviews major techniques, trade-offs, and where each excels.",
        &[
            "Define switching and why networks rely on it",
            "Explore circuit, packet, and message switching",
            "Compare strengths, limitations, and applications",
        ],
    ),
    (
        "What Is Switching?",
        "Switching refers to directing data from an input port to the correct output port across an interconnected network.",
        &[
            "Establishes temporary or permanent paths between communicating devices",
            "Optimizes resource usage while meeting quality demands",
            "Underpins telephony, data networks, and industrial communication",
        ],
    ),
    (
        "Circuit Switching Essentials",
        "Circuit switching sets up a dedicated end-to-end communication path before data transmission begins.",
        &[
            "Three phases: call setup, data transfer, teardown",
            "Resources (bandwidth, timeslots) reserved for the session",
            "Used in traditional PSTN and legacy WAN services (e.g., ISDN)",
        ],
    ),
    (
        "Circuit Switching Advantages",
        "Deterministic connections suit real-time and latency-sensitive services.",
        &[
            "Guaranteed bandwidth and predictable delay once the circuit is established",
            "No packet overhead or reordering since data follows a fixed path",
            "Simplifies synchronization for voice and streamed media",
        ],
    ),
    (
        "Circuit Switching Limitations",
        "Continuous resource allocation can hinder scalability and efficiency.",
        &[
            "Idle periods waste reserved capacity during silence or bursty traffic",
            "Call blocking occurs under high demand because circuits are finite",
            "Setup latency makes short-lived data exchanges inefficient",
        ],
    ),
    (
        "Packet Switching Essentials",
        "Packet switching breaks data into independent packets routed dynamically through the network.",
        &[
            "Supports datagram mode (connectionless) and virtual circuit mode (connection-oriented)",
            "Routers forward packets based on destination addresses and routing tables",
            "Foundation of the Internet, local area networks, and modern cloud backbones",
        ],
    ),
    (
        "Packet Switching Advantages",
        "Statistical multiplexing drives efficient link utilization.",
        &[
            "Shared bandwidth adapts to bursty data patterns across users",
            "Automatic rerouting around failures improves resiliency",
            "Flexible QoS policies via priority queues and traffic engineering",
        ],
    ),
    (
        "Packet Switching Limitations",
        "Dynamic routing introduces uncertainty that must be managed.",
        &[
            "Variable latency and jitter can disrupt real-time flows without QoS controls",
            "Packet overhead from headers and acknowledgements reduces payload efficiency",
            "Congestion requires complex algorithms (e.g., TCP congestion control)",
        ],
    ),
    (
        "Message Switching Essentials",
        "Message switching stores entire messages at intermediate nodes before forwarding.",
        &[
            "\"Store-and-forward\" operation eliminates the need for a dedicated path",
            "Messages routed based on addressing metadata and availability",
            "Historically used in telegraph networks and some military systems",
        ],
    ),
    (
        "Message Switching Advantages",
        "Useful when connections are intermittent or bandwidth constrained.",
        &[
            "Links never reserved exclusively, maximizing shared medium usage",
            "Supports prioritization and alternate routing with full-message context",
            "Handles heterogeneous message sizes without fragmentation",
        ],
    ),
    (
        "Message Switching Limitations",
        "Buffering entire messages introduces significant delay and storage needs.",
        &[
            "High latency unsuitable for interactive communication",
            "Requires large memory at switching nodes to store messages",
            "Failure at an intermediate node can delay multiple messages",
        ],
    ),
    (
        "Hybrid & Emerging Approaches",
        "Modern networks mix techniques to balance efficiency, determinism, and scalability.",
        &[
            "Multi-Protocol Label Switching (MPLS) blends circuit-like labels with packet cores",
            "Software-Defined Networking (SDN) centralizes path control for agility",
            "Time-Sensitive Networking (TSN) extends Ethernet with deterministic scheduling",
        ],
    ),
    (
        "Notable Applications",
        "Each switching technique maps to domains with matching service requirements.",
        &[
            "Circuit: public switched telephone networks, leased lines, optical transport",
            "Packet: Internet backbones, enterprise LANs, 5G core networks",
            "Message: delay-tolerant networking, satellite store-and-forward relays",
        ],
    ),
    (
        "Comparative Snapshot",
        "Key trade-offs guide architectural choices.",
        &[
            "Efficiency: packet > message > circuit for bursty traffic",
            "Latency control: circuit > packet (with QoS) > message",
            "Complexity: message (simpler routing) < circuit < packet (dynamic control)",
        ],
    ),
    (
        "Key Takeaways & Next Steps",
        "Selecting a switching technique depends on service guarantees, cost, and scalability goals.",
        &[
            "No single technique dominates; hybrid designs prevail in modern infrastructures",
            "QoS engineering and traffic analytics mitigate disadvantages",
            "Future research explores intent-based networking and AI-driven switching decisions",
        ],
    ),
];

pub fn builtin_slides() -> Vec<Slide> {
    SLIDES
        .iter()
        .map(|(title, description, bullets)| Slide::new(title, description, bullets))
        .collect()
}
