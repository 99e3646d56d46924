use crate::agents::AgentRegistry;
use crate::error::Result;

pub fn execute(registry: &AgentRegistry, detected: bool, json: bool) -> Result<()> {
    let agents = if detected {
        registry.detected()
    } else {
        registry.all()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&*agents)?);
        return Ok(());
    }

    if agents.is_empty() {
        if detected {
            println!("No installed agents detected.");
        } else {
            println!("No agents defined.");
        }
        return Ok(());
    }

    println!(
        "{:<12} {:<16} {:<24} GLOBAL SKILLS",
        "AGENT", "NAME", "PROJECT SKILLS"
    );
    println!("{}", "-".repeat(76));
    for agent in agents.iter() {
        println!(
            "{:<12} {:<16} {:<24} {}",
            agent.name,
            agent.display_name,
            agent.skills_dir.display(),
            agent.global_skills_dir.display()
        );
    }

    Ok(())
}
