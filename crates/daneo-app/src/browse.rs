use daneo_core::{FlowError, SessionFlow, Step};
use daneo_types::TestHandoff;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Page through the loaded words. Returns once the flow reaches `Finished`
/// or the learner quits.
pub async fn browse(flow: &mut SessionFlow, interactive: bool) -> anyhow::Result<()> {
    if !interactive {
        for (i, pair) in flow.words().iter().enumerate() {
            println!("{:>3}. {} : {}", i + 1, pair.source(), pair.target());
        }
        while let Ok(Step::Moved(_)) = flow.next() {}
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let total = flow.words().len();

    loop {
        if let (Some(cursor), Some(pair)) = (flow.cursor(), flow.current()) {
            let marker = if pair.is_placeholder() { " (!)" } else { "" };
            println!("\n[{}/{}] {}{}", cursor + 1, total, pair.source(), marker);
            println!("      {}", pair.target());
        }

        stdout.write_all(b"[n]ext / [p]rev / [q]uit > ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" | "n" => {
                if flow.next()? == Step::Finished {
                    break;
                }
            }
            "p" => match flow.previous() {
                Ok(_) => {}
                Err(FlowError::AtFirstWord) => println!("첫 번째 단어입니다."),
                Err(e) => return Err(e.into()),
            },
            "q" => break,
            other => println!("알 수 없는 명령: {other}"),
        }
    }

    Ok(())
}

/// What the test screen gets: a numbered list, or JSON with `--json`
pub fn render_handoff(handoff: &TestHandoff, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(handoff)?);
    }

    let mut out = format!("테스트 단어 {}개\n", handoff.words.len());
    for (i, pair) in handoff.words.iter().enumerate() {
        out.push_str(&format!("{:>3}. {} : {}\n", i + 1, pair.source(), pair.target()));
    }
    Ok(out)
}
