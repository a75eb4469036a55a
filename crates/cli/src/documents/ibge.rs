//! Research document on IBGE and the APM (Agente de Pesquisas e Mapeamento)
//! exam syllabus.

use docgen_core::{Document, DocumentBuilder, DocumentProperties, HouseStyle};

pub const DEFAULT_OUTPUT: &str = "pesquisa_ibge_apm.docx";

const TITLE: &str = "PESQUISA COMPLETA: IBGE E CONCURSO PARA APM";

pub fn build() -> Document {
    let mut doc = DocumentBuilder::new().with_house_style(HouseStyle::research());
    doc.properties(DocumentProperties {
        title: Some(TITLE.to_string()),
        subject: Some("Pesquisa sobre IBGE e Concurso para APM".to_string()),
        ..DocumentProperties::default()
    });

    doc.title(TITLE)
        .body_paragraph("Agente de Pesquisas e Mapeamento", true, false)
        .empty_paragraph();

    institute(&mut doc);
    apm_role(&mut doc);
    syllabus(&mut doc);
    preparation(&mut doc);
    closing(&mut doc);

    doc.build()
}

/// Sections 1-6: what IBGE is and does.
fn institute(doc: &mut DocumentBuilder) {
    doc.heading("1. O QUE É O IBGE?", 1)
        .paragraph(
            "O Instituto Brasileiro de Geografia e Estatística (IBGE) é a principal instituição \
             pública federal dedicada à produção, análise e disseminação de informações \
             estatísticas, geográficas, cartográficas e ambientais sobre o Brasil.",
        )
        .paragraph(
            "As atividades do IBGE têm impacto direto no planejamento, execução e avaliação de \
             políticas públicas, pesquisas acadêmicas, estratégias de mercado e tomadas de \
             decisão em todo o país.",
        );

    doc.heading("2. HISTÓRIA DO IBGE", 1).bullet_list([
        "Origem remonta à Diretoria Geral de Estatística (1871)",
        "Instituto Nacional de Estatística criado em 1934",
        "Criação oficial do IBGE em 1936",
        "Em 1938, incorporou o Conselho Brasileiro de Geografia, consolidando-se como IBGE",
        "Primeiro Censo Demográfico realizado em 1940",
        "Desde então, realiza censos e levantamentos que acompanham a evolução da sociedade brasileira",
    ]);

    doc.heading("3. MISSÃO DO IBGE", 1)
        .body_paragraph(
            "\"Retratar o Brasil com informações necessárias ao conhecimento da sua realidade e \
             ao exercício da cidadania.\"",
            true,
            true,
        )
        .paragraph(
            "Esta missão reflete o compromisso do instituto em fornecer dados confiáveis e \
             acessíveis que fundamentem decisões estratégicas em todas as esferas da sociedade.",
        );

    doc.heading("4. FUNÇÕES E ATRIBUIÇÕES DO IBGE", 1)
        .heading("4.1. Informações Estatísticas", 2)
        .paragraph("Produção e análise de informações estatísticas sobre:")
        .bullet_list([
            "População (Censo Demográfico)",
            "Economia (PIB, índices econômicos)",
            "Saúde e Educação",
            "Trabalho e Renda (PNAD Contínua)",
            "Inflação e Custo de Vida (IPCA)",
            "Meio Ambiente",
        ]);
    doc.heading("4.2. Informações Geográficas e Cartográficas", 2)
        .bullet_list([
            "Mapeamento completo do território brasileiro",
            "Organização de bases cartográficas",
            "Estudos ambientais e geográficos",
            "Atualização de divisões político-administrativas",
        ]);
    doc.heading("4.3. Coordenação e Padronização", 2).paragraph(
        "Coordenação e padronização dos sistemas estatísticos e cartográficos nacionais, \
         garantindo uniformidade e qualidade dos dados em todo o país.",
    );
    doc.heading("4.4. Disseminação de Informações", 2)
        .paragraph("Divulgação transparente e acessível de todas as informações por meio de:")
        .bullet_list([
            "Publicações impressas e digitais",
            "Gráficos e visualizações de dados",
            "Mapas interativos",
            "Bases de dados online",
            "Portal oficial na internet",
        ]);

    doc.heading("5. PRINCIPAIS CENSOS E PESQUISAS DO IBGE", 1);
    let surveys = [
        (
            "Censo Demográfico",
            "Realizado a cada 10 anos, é fundamental para conhecer a população brasileira, sua \
             distribuição geográfica, condições de vida e mudanças sociais ao longo do tempo.",
        ),
        (
            "PNAD Contínua (Pesquisa Nacional por Amostra de Domicílios)",
            "Pesquisa regular e contínua sobre trabalho, renda, educação e condições de vida da \
             população brasileira.",
        ),
        (
            "IPCA (Índice de Preços ao Consumidor Amplo)",
            "Principal índice de inflação do país, acompanha o custo de vida dos brasileiros e \
             serve de referência para a política monetária.",
        ),
        (
            "Censo Agropecuário",
            "Levantamento completo sobre o desenvolvimento rural, agricultura, pecuária e \
             estrutura fundiária do Brasil.",
        ),
    ];
    for (name, description) in surveys {
        doc.heading(name, 2).paragraph(description);
    }
    doc.heading("Outras Pesquisas", 2).bullet_list([
        "Pesquisas sobre educação e saúde",
        "Estudos sobre meio ambiente e sustentabilidade",
        "Levantamentos sobre produtividade industrial",
        "Pesquisas municipais e regionais",
        "Estudos econômicos setoriais",
    ]);

    doc.heading("6. IMPORTÂNCIA SOCIAL E POLÍTICA DO IBGE", 1)
        .bullet_list([
            "Fundamenta políticas públicas em todas as esferas governamentais",
            "Fornece base para estudos acadêmicos e científicos",
            "Orienta pesquisas de mercado e estratégias empresariais",
            "Subsidia o planejamento territorial e urbano",
            "A colaboração com pesquisas do IBGE é prevista em lei e obrigatória",
            "Coloca o Brasil em posição estratégica nos relatórios globais de desenvolvimento",
            "Garante transparência e democratização do acesso à informação",
        ]);
}

/// Section 7: the APM role.
fn apm_role(doc: &mut DocumentBuilder) {
    doc.heading("7. AGENTE DE PESQUISAS E MAPEAMENTO (APM)", 1)
        .heading("7.1. O que é o cargo de APM?", 2)
        .paragraph(
            "O Agente de Pesquisas e Mapeamento é um cargo de nível médio no IBGE, fundamental \
             para a produção de estatísticas oficiais e levantamento de informações para \
             políticas públicas. É uma função que exige disposição para trabalho externo e \
             contato direto com a população.",
        )
        .heading("7.2. Principais Atribuições do APM", 2);

    let duties: [(&str, &[&str]); 4] = [
        (
            "Coleta de Dados",
            &[
                "Visita domicílios, comércios, indústrias e estabelecimentos rurais",
                "Realiza entrevistas presenciais ou por telefone",
                "Preenche questionários impressos ou digitais",
                "Segue protocolos e prazos estabelecidos pelo IBGE",
            ],
        ),
        (
            "Mapeamento e Levantamento Geográfico",
            &[
                "Coleta informações cartográficas das áreas de atuação",
                "Registra nomes geográficos e pontos de referência",
                "Identifica características urbanísticas",
                "Colabora com atualização de mapas",
                "Levanta divisões político-administrativas (setores urbanos e rurais)",
            ],
        ),
        (
            "Organização e Transmissão de Dados",
            &[
                "Prepara e organiza o material coletado",
                "Transmite ou entrega questionários aos supervisores",
                "Opera sistemas e equipamentos eletrônicos do IBGE",
                "Garante segurança e integridade dos dados coletados",
            ],
        ),
        (
            "Operação de Equipamentos",
            &[
                "Opera dispositivos móveis de coleta (tablets e smartphones)",
                "Cuida dos equipamentos cedidos pelo IBGE",
                "Utiliza EPIs quando necessário",
                "Pode dirigir veículos locados pelo instituto",
                "Mantém organização dos materiais de campo",
            ],
        ),
    ];
    for (name, items) in duties {
        doc.heading(name, 3).bullet_list(items.iter().copied());
    }

    doc.heading("7.3. Como é o Dia a Dia do APM?", 2).bullet_list([
        "Trabalho predominantemente de campo",
        "Visitas diárias a locais variados",
        "Deslocamentos entre bairros e localidades",
        "Conversas com moradores e responsáveis por estabelecimentos",
        "Inserção de dados nos sistemas",
        "Soluções para recusa ou ausência de pessoas",
        "Orientação sobre a importância das pesquisas do IBGE",
        "Participação em treinamentos regulares",
        "Atualização sobre mudanças metodológicas",
    ]);

    doc.heading("7.4. Perfil Ideal para o Cargo", 2).bullet_list([
        "Responsabilidade e disciplina com prazos",
        "Boa organização pessoal",
        "Excelente comunicação interpessoal",
        "Gostar de trabalho externo",
        "Disposição para contato com pessoas",
        "Interesse em questões geográficas e territoriais",
        "Capacidade de trabalhar com autonomia",
    ]);
}

/// Section 8: exam syllabus by discipline.
fn syllabus(doc: &mut DocumentBuilder) {
    doc.heading("8. CONTEÚDO PROGRAMÁTICO DO CONCURSO PARA APM", 1)
        .paragraph(
            "O concurso do IBGE para Agente de Pesquisas e Mapeamento aborda disciplinas \
             tradicionais de concursos de nível médio, além de conhecimentos específicos \
             importantes para a função.",
        );

    doc.heading("8.1. LÍNGUA PORTUGUESA", 2).bullet_list([
        "Interpretação de textos",
        "Compreensão e análise de textos",
        "Tipologia e gêneros textuais",
        "Ortografia oficial",
        "Acentuação gráfica",
        "Pontuação",
        "Classes de palavras",
        "Formação de palavras",
        "Concordância verbal e nominal",
        "Regência verbal e nominal",
        "Colocação pronominal",
        "Crase",
        "Sintaxe da oração e do período",
        "Coesão e coerência textual",
        "Reescrita de frases",
        "Significação de palavras (sinônimos, antônimos, homônimos, parônimos)",
    ]);

    doc.heading("8.2. MATEMÁTICA E RACIOCÍNIO LÓGICO", 2)
        .heading("Matemática:", 3)
        .bullet_list([
            "Razão e proporção",
            "Porcentagem",
            "Regra de três simples e composta",
            "Equações de 1º e 2º grau",
            "Sistemas de equações",
            "Progressões aritméticas e geométricas",
            "Juros simples e compostos",
            "Geometria plana e espacial",
            "Medidas de comprimento, área, volume, massa, tempo",
            "Análise e interpretação de gráficos e tabelas",
        ])
        .heading("Raciocínio Lógico:", 3)
        .bullet_list([
            "Lógica proposicional",
            "Conectivos lógicos",
            "Tabelas-verdade",
            "Equivalências lógicas",
            "Argumentos lógicos",
            "Sequências numéricas e alfabéticas",
            "Verdades e mentiras",
            "Lógica de primeira ordem",
            "Princípios de contagem",
            "Probabilidade básica",
        ]);

    doc.heading("8.3. ÉTICA NO SERVIÇO PÚBLICO", 2).bullet_list([
        "Princípios éticos e morais",
        "Ética e democracia",
        "Exercício da cidadania",
        "Ética e função pública",
        "Código de Ética Profissional do Servidor Público Civil do Poder Executivo Federal",
        "Conduta na administração pública",
        "Legislação relacionada ao funcionalismo público",
        "Deveres e proibições do servidor público",
        "Responsabilidades e penalidades",
    ]);

    doc.heading("8.4. NOÇÕES DE INFORMÁTICA", 2).bullet_list([
        "Conceitos básicos de informática",
        "Componentes de hardware e software",
        "Sistemas operacionais (Windows, Linux)",
        "Editores de texto (Microsoft Word, LibreOffice Writer)",
        "Planilhas eletrônicas (Microsoft Excel, LibreOffice Calc)",
        "Apresentações (PowerPoint, Impress)",
        "Conceitos de internet e intranet",
        "Navegadores de internet",
        "Correio eletrônico",
        "Mecanismos de busca",
        "Segurança da informação",
        "Vírus, malware e antivírus",
        "Backup e armazenamento de dados",
        "Computação em nuvem",
        "Ferramentas de colaboração virtual (Google Workspace, Microsoft 365)",
    ]);

    doc.heading("8.5. GEOGRAFIA (CONHECIMENTO ESPECÍFICO)", 2).paragraph(
        "A Geografia é a disciplina de maior peso e importância para o cargo de APM, sendo \
         fundamental para o desempenho das funções. Os temas principais incluem:",
    );

    let geography: [(&str, &[&str]); 5] = [
        (
            "Geografia Física:",
            &[
                "Características do território brasileiro",
                "Relevo, clima, hidrografia e vegetação do Brasil",
                "Biomas brasileiros",
                "Recursos naturais",
                "Questões ambientais",
                "Sustentabilidade e preservação ambiental",
            ],
        ),
        (
            "Cartografia:",
            &[
                "Noções básicas de cartografia",
                "Leitura e interpretação de mapas",
                "Escalas cartográficas",
                "Coordenadas geográficas",
                "Projeções cartográficas",
                "Orientação e localização espacial",
                "Fusos horários",
                "Uso de GPS e tecnologias de geolocalização",
            ],
        ),
        (
            "Geografia Humana e Econômica:",
            &[
                "Dinâmica populacional brasileira",
                "Crescimento demográfico",
                "Migrações internas e externas",
                "Distribuição da população no território",
                "Urbanização e problemas urbanos",
                "Estrutura econômica do Brasil",
                "Setores da economia (primário, secundário, terciário)",
                "Atividades econômicas regionais",
                "Divisão regional do Brasil",
                "Aspectos socioeconômicos das regiões",
            ],
        ),
        (
            "Geografia Política e Administrativa:",
            &[
                "Organização político-administrativa do Brasil",
                "Divisão política: estados e municípios",
                "Regiões geográficas e geoeconômicas",
                "Fronteiras do Brasil",
                "Relações internacionais",
            ],
        ),
        (
            "Temas relacionados à atuação do IBGE:",
            &[
                "Coleta e análise de dados estatísticos",
                "Metodologias de pesquisa do IBGE",
                "Importância dos censos",
                "Uso de dados geográficos e estatísticos",
                "Setores censitários",
                "Malha territorial brasileira",
            ],
        ),
    ];
    for (name, items) in geography {
        doc.heading(name, 3).bullet_list(items.iter().copied());
    }
}

/// Sections 9-10: study tips and job details.
fn preparation(doc: &mut DocumentBuilder) {
    doc.heading("9. DICAS DE PREPARAÇÃO PARA O CONCURSO", 1)
        .numbered_list([
            "Foque na Geografia - É a disciplina com maior peso e mais relevante para a função de APM",
            "Estude o edital completo - Conheça todos os tópicos que serão cobrados",
            "Resolva provas anteriores - Especialmente do IBGE e da banca organizadora (geralmente FGV ou IBFC)",
            "Pratique Raciocínio Lógico - É uma matéria que exige bastante prática de questões",
            "Treine informática na prática - Use os programas mencionados no edital",
            "Mantenha-se atualizado - Acompanhe notícias sobre o IBGE e suas pesquisas",
            "Organize um cronograma - Distribua o tempo de estudo entre todas as disciplinas",
            "Faça simulados - Teste seus conhecimentos em condições semelhantes à prova",
            "Revise constantemente - Use técnicas de revisão espaçada",
            "Estude Língua Portuguesa diariamente - É fundamental para todas as outras matérias",
            "Conheça a legislação - Principalmente o Código de Ética do Servidor Público",
            "Pratique leitura de mapas - Fundamental para a função de APM",
        ]);

    doc.heading("10. INFORMAÇÕES SOBRE O CARGO", 1)
        .heading("Requisitos:", 2)
        .bullet_list([
            "Ensino Médio completo",
            "Idade mínima de 18 anos",
            "Carteira Nacional de Habilitação (CNH) categoria B (desejável)",
        ])
        .heading("Remuneração e Benefícios (valores aproximados):", 2)
        .bullet_list([
            "Salário base: aproximadamente R$ 2.676,24 (pode variar conforme edital)",
            "Auxílio-alimentação",
            "Auxílio-transporte",
            "Férias proporcionais",
            "13º salário proporcional",
        ])
        .heading("Jornada de Trabalho:", 2)
        .paragraph(
            "40 horas semanais, com trabalho predominantemente externo, podendo incluir finais \
             de semana e horários diferenciados conforme as necessidades das pesquisas.",
        );
}

/// Section 11 and the generated-by footer.
fn closing(doc: &mut DocumentBuilder) {
    doc.heading("11. CONSIDERAÇÕES FINAIS", 1)
        .paragraph(
            "O cargo de Agente de Pesquisas e Mapeamento do IBGE é uma excelente oportunidade \
             para quem busca:",
        )
        .bullet_list([
            "Trabalho dinâmico e variado",
            "Contato direto com a realidade das cidades brasileiras",
            "Contribuir com informações estratégicas para o país",
            "Estabilidade no serviço público",
            "Desenvolvimento profissional na área de pesquisas e estatísticas",
        ])
        .empty_paragraph()
        .body_paragraph(
            "A preparação adequada, com foco especial em Geografia e estudo constante de todas \
             as disciplinas, aumenta significativamente as chances de aprovação no concurso.",
            true,
            true,
        )
        .empty_paragraph()
        .paragraph(
            "Lembre-se: o IBGE é responsável por retratar o Brasil, e você, como APM, será parte \
             fundamental desse processo de conhecimento e desenvolvimento do país!",
        )
        .empty_paragraph()
        .empty_paragraph()
        .paragraph("___________________________________________")
        .body_paragraph("Documento gerado automaticamente", false, false)
        .body_paragraph("Pesquisa sobre IBGE e Concurso para APM", false, false);
}
