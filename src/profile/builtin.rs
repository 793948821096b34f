use super::{ContactInfo, EducationRecord, ExperienceEntry, Icon, Profile, ProfileLink};

impl Profile {
    /// The résumé shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            name: "Vanessa Matias".to_string(),
            title: "Estudante".to_string(),
            photo_url:
                "https://drive.google.com/uc?export=view&id=1j8er0tbCmtZD7cxlXV-E_e93nQrBsg8d"
                    .to_string(),
            about: "Estudante de Análise e Desenvolvimento de Sistemas (SENAC), com foco em \
                    pensamento analítico e transformação digital. Atualmente, atuo como \
                    Monitora do Laboratório de Inovação do Porto Digital e participante ativa \
                    em projetos premiados de tecnologia e impacto social."
                .to_string(),
            education: EducationRecord {
                course: "Análise e Desenvolvimento de Sistemas".to_string(),
                institution: "Faculdade Senac Pernambuco".to_string(),
                duration: "2025 - Presente".to_string(),
            },
            contact: ContactInfo {
                email: "vanessamatias16.s@gmail.com".to_string(),
                linkedin: ProfileLink {
                    label: "LinkedIn/vanessamatiasdev".to_string(),
                    url: "https://www.linkedin.com/in/vanessamatiasdev/".to_string(),
                },
                github: ProfileLink {
                    label: "GitHub/Vanessa-Matias".to_string(),
                    url: "https://github.com/Vanessa-Matias".to_string(),
                },
            },
            experience: vec![
                ExperienceEntry {
                    id: 1,
                    title: "Residência Tecnológica em Robótica: Projeto MindCode".to_string(),
                    company: "CETEC".to_string(),
                    duration: "Ago 2025 - Presente".to_string(),
                    description: "Desenvolvimento de um projeto educacional de lógica de \
                                  programação para crianças (Ensino Fundamental I) usando o robô \
                                  NAO V6. Foco em interações com sensores táteis, automação e \
                                  raciocínio lógico."
                        .to_string(),
                    icon: Icon::Code,
                },
                ExperienceEntry {
                    id: 2,
                    title: "Monitora do Laboratório de Inovação do Embarque Digital".to_string(),
                    company: "Porto Digital".to_string(),
                    duration: "Ago 2025 - Presente".to_string(),
                    description: "Suporte à gestão, manutenção e desenvolvimento de ambientes \
                                  tecnológicos para educação e inovação. Atuação em suporte \
                                  técnico de infraestrutura de TI e colaboração na organização \
                                  de eventos de inovação."
                        .to_string(),
                    icon: Icon::Briefcase,
                },
                ExperienceEntry {
                    id: 3,
                    title: "Projeto Chico no Clima (Premiado)".to_string(),
                    company: "SENAC".to_string(),
                    duration: "Out 2024 - Out 2025".to_string(),
                    description: "Fortalecimento do protagonismo juvenil em mudanças climáticas. \
                                  Incluiu design interativo do \"Caranguejo Robótico Chico\", \
                                  produção de conteúdo (Chico Sabido) e comunicação do projeto \
                                  vencedor do Jovens no Clima 2025 (selecionado para COP 30)."
                        .to_string(),
                    icon: Icon::Link,
                },
            ],
            skills: [
                "Python",
                "SQL (MySQL)",
                "HTML/CSS",
                "Excel",
                "Git/GitHub",
                "R",
                "Pandas",
                "NúmPy",
                "Robótica",
                "Inovação Tecnológica",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profile_is_valid() {
        assert!(Profile::builtin().validate().is_ok());
    }

    #[test]
    fn builtin_experience_keeps_literal_order() {
        let ids: Vec<u32> = Profile::builtin().experience.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
