//! Built-in content served when no live backend is reachable.
//!
//! The public site must never render empty. These entries mirror the
//! hand-curated posts and works the site launched with, and stand in
//! for database rows whenever a fetch fails or returns nothing.

use entity::post::BlogPost;
use entity::work::{WorkItem, WorkType};

pub fn fallback_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "geopolitics-ai".to_string(),
            title: "Drawing The Geopolitical Boundaries Around AI"
                .to_string(),
            date: "November 6, 2025".to_string(),
            summary: "The US-China truce on tariffs left one issue \
                      untouched: export controls on AI chips. This \
                      reveals the deeper stakes behind America's \
                      strategy for compute dominance."
                .to_string(),
            content: r#"
      <p class="lead">In late October 2025, Trump and Xi agreed to a one-year truce on tariffs and rare-earths, but left one issue untouched: US export controls on AI chips.</p>
      <p>Within days, Trump signaled he'd allow limited Nvidia sales to China before reversing course. The episode reveals the deeper stakes behind America's AI strategy: how to balance short-term technological leverage against long-term industrial strength in the race for compute dominance.</p>
      <h2>The Compute Advantage</h2>
      <p>AI progress has been driven by three inputs: data, algorithms, and compute. Unlike data or algorithms, state-of-the-art compute is virtually monopolized by the West. It exists as a stack of hardware, software, and infrastructure concentrated in a handful of chokepoints controlled by the US and its allies.</p>
      <h2>The Strategic Choke Point</h2>
      <p>The semiconductor supply chain is not just a market; it is the central nervous system of the 21st-century economy. Control over high-end compute is the modern equivalent of control over oil shipping lanes.</p>
      <h2>Industrial Sovereignty</h2>
      <p>The restrictions are forcing China to accelerate its domestic semiconductor capabilities. While this causes short-term pain for Chinese tech giants, it creates a long-term strategic rival that is completely decoupled from Western supply chains. The "choke point" strategy has a shelf life.</p>
    "#
            .to_string(),
            tags: vec![
                "Deep Dive".to_string(),
                "Hardware".to_string(),
                "Policy".to_string(),
            ],
            published: true,
            ..Default::default()
        },
        BlogPost {
            id: "singularity-self".to_string(),
            title: "The Singularity of Self".to_string(),
            date: "November 12, 2025".to_string(),
            summary: "When 'I' becomes a network: An exploration of \
                      digital identity and the dissolution of the ego \
                      in a hyper-connected age."
                .to_string(),
            content: r#"
      <p class="lead">The modern concept of "self" is undergoing a radical fragmentation. We are no longer singular entities but distributed networks of data, interactions, and digital footprints.</p>
      <p>As we offload more of our cognition to algorithms and our memory to the cloud, the boundary between the biological individual and the digital extension blurs.</p>
      <h2>The Networked Ego</h2>
      <p>We are designing for the "Networked Self" &mdash; a user who exists in multiple states simultaneously. The user is no longer a static point of origin for action, but a node in a continuous flow of information.</p>
      <h2>Designing for Fluidity</h2>
      <p>When we design for the future, we must stop designing for users as static points and start designing for users as dynamic flows. The "Self" is no longer a noun; it is a verb.</p>
      <h2>The End of Privacy?</h2>
      <p>If the self is a network, then privacy is not about hiding information, but about controlling the flow. The challenge for the next decade will be building tools that allow us to manage our distributed selves without losing the cohesion of our identity.</p>
    "#
            .to_string(),
            tags: vec![
                "Philosophy".to_string(),
                "Identity".to_string(),
                "Future".to_string(),
            ],
            published: true,
            ..Default::default()
        },
        BlogPost {
            id: "silent-interface".to_string(),
            title: "The Silent Interface".to_string(),
            date: "October 15, 2025".to_string(),
            summary: "Why the best UI is no UI at all. Moving beyond \
                      screens into the era of ambient computing and \
                      neural inputs."
                .to_string(),
            content: r#"
      <p class="lead">For forty years, we have been trapped behind glass. The screen has been our primary window into the digital world. But the screen is a barrier. It demands attention, it requires focus, and it separates us from our environment.</p>
      <p>The next era of interface design is silent. It is ambient. It is there when you need it and invisible when you don't.</p>
      <h2>Ambient Computing</h2>
      <p>Imagine a workspace where the OS doesn't live on a monitor, but exists as a layer of intelligence over your physical desk. Information is projected only when relevant. Controls appear only when your hand moves to interact with them.</p>
      <h2>Neural Inputs</h2>
      <p>The keyboard is a bandwidth bottleneck. We think faster than we can type. Neural interfaces, even non-invasive ones like EMG wristbands, promise to remove this friction, allowing us to interact with digital systems at the speed of thought.</p>
    "#
            .to_string(),
            tags: vec![
                "Design".to_string(),
                "Future".to_string(),
                "HCI".to_string(),
            ],
            published: true,
            ..Default::default()
        },
    ]
}

pub fn fallback_works() -> Vec<WorkItem> {
    let posts = fallback_posts();
    let singularity_content = posts
        .iter()
        .find(|p| p.id == "singularity-self")
        .map(|p| p.content.clone());

    vec![
        WorkItem {
            id: "coincentral".to_string(),
            work_type: WorkType::Project,
            title: "CoinCentral".to_string(),
            subtext: "Crypto media company with 12m+ readers"
                .to_string(),
            description: "A leading independent publication covering \
                          the blockchain ecosystem, growing from zero \
                          to 12 million annual readers in under 18 \
                          months."
                .to_string(),
            content: Some(
                r#"
      <p>CoinCentral was built to cut through the noise of the 2017 crypto boom. While other publications chased hype, we focused on educational, evergreen content that helped users actually understand the technology.</p>
      <h3>Key Metrics</h3>
      <ul>
        <li>Scaled to <strong>12 Million+</strong> unique annual readers.</li>
        <li>Developed a proprietary SEO strategy that outranked major incumbents.</li>
        <li>Built a distributed team of 40+ writers, editors, and researchers.</li>
      </ul>
      <h3>The Architecture</h3>
      <p>We engineered a headless CMS solution optimized for core web vitals and rapid content delivery, ensuring our analysis reached the market faster than competitors.</p>
    "#
                .to_string(),
            ),
            tags: vec![
                "Media".to_string(),
                "Growth Scale".to_string(),
                "Blockchain".to_string(),
                "React".to_string(),
            ],
            image: "https://picsum.photos/seed/coin/800/600".to_string(),
            link: Some("https://coincentral.com".to_string()),
            published: true,
            display_order: 0,
            ..Default::default()
        },
        WorkItem {
            id: "singularity-self".to_string(),
            work_type: WorkType::Blog,
            title: "The Singularity of Self".to_string(),
            subtext: "When 'I' Becomes a Network".to_string(),
            description: "An exploration of digital identity and the \
                          dissolution of the ego in a hyper-connected \
                          age."
                .to_string(),
            date: Some("2024-11-12".to_string()),
            content: singularity_content,
            tags: vec![
                "Philosophy".to_string(),
                "Identity".to_string(),
                "Future".to_string(),
            ],
            image: "https://picsum.photos/seed/singularity/800/600"
                .to_string(),
            published: true,
            display_order: 1,
            ..Default::default()
        },
        WorkItem {
            id: "aether-os".to_string(),
            work_type: WorkType::Project,
            title: "Aether OS".to_string(),
            subtext: "Spatial Computing Operating System".to_string(),
            description: "A concept web-based operating system \
                          designed for the spatial computing era, \
                          removing the constraints of 2D windows."
                .to_string(),
            content: Some(
                r#"
      <p>Traditional operating systems are stuck in the desktop metaphor of the 1980s. Aether OS reimagines the workspace as an infinite 3D canvas.</p>
      <h3>Core Concepts</h3>
      <ul>
        <li><strong>Spatial Context:</strong> Files are organized by proximity and relationship, not folders.</li>
        <li><strong>Gesture First:</strong> Designed primarily for hand-tracking inputs via WebXR.</li>
        <li><strong>Fluid Multitasking:</strong> Applications exist in a shared volume, interacting with each other physically.</li>
      </ul>
    "#
                .to_string(),
            ),
            tags: vec![
                "Spatial Computing".to_string(),
                "Three.js".to_string(),
                "WebXR".to_string(),
                "UI/UX".to_string(),
            ],
            image: "https://picsum.photos/seed/aether/800/600"
                .to_string(),
            published: true,
            display_order: 2,
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fallback_posts_are_published() {
        // Act
        let posts = fallback_posts();

        // Assert
        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(|p| p.published));
    }

    #[test]
    fn blog_work_reuses_post_content() {
        // Arrange
        let posts = fallback_posts();
        let works = fallback_works();

        // Act
        let teaser = works
            .iter()
            .find(|w| w.id == "singularity-self")
            .unwrap();
        let post = posts
            .iter()
            .find(|p| p.id == "singularity-self")
            .unwrap();

        // Assert
        assert_eq!(teaser.work_type, WorkType::Blog);
        assert_eq!(teaser.content.as_deref(), Some(post.content.as_str()));
    }

    #[test]
    fn works_keep_curated_order() {
        // Act
        let works = fallback_works();

        // Assert
        let orders: Vec<i32> =
            works.iter().map(|w| w.display_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }
}
