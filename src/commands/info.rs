use crate::agents::AgentRegistry;
use crate::error::Result;

pub fn execute(registry: &AgentRegistry, name: &str, json: bool) -> Result<()> {
    let agent = registry.find(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&agent)?);
        return Ok(());
    }

    println!("Agent:          {}", agent.name);
    println!("Name:           {}", agent.display_name);
    println!("Project skills: {}", agent.skills_dir.display());
    println!("Global skills:  {}", agent.global_skills_dir.display());

    let installed = registry.detected().iter().any(|a| a.name == agent.name);
    println!("Detected:       {}", if installed { "yes" } else { "no" });

    Ok(())
}
