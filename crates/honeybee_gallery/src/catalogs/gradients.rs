//! CSS gradient presets

use honeybee_core::{Gradient, GradientCategory};

pub static GRADIENTS: &[Gradient] = &[
    Gradient {
        id: "aurora-borealis",
        name: "Aurora Borealis",
        description: "Flowing northern lights effect with dynamic motion",
        category: GradientCategory::Aurora,
        usage: "Hero sections, backgrounds, loading states",
        css: r#"background: linear-gradient(125deg, #0f0c29, #302b63, #24243e);
position: relative;
overflow: hidden;

&::before {
  content: '';
  position: absolute;
  top: -50%;
  left: -50%;
  width: 200%;
  height: 200%;
  background: linear-gradient(
    45deg,
    transparent 30%,
    rgba(0, 255, 255, 0.1) 50%,
    transparent 70%
  );
  animation: aurora 6s linear infinite;
}

@keyframes aurora {
  0% { transform: translateX(-50%) rotate(0deg); }
  100% { transform: translateX(50%) rotate(360deg); }
}"#,
    },
    Gradient {
        id: "mesh-purple",
        name: "Purple Mesh",
        description: "Soft multi-point mesh gradient like Apple Music",
        category: GradientCategory::Mesh,
        usage: "Music apps, creative portfolios, branding",
        css: r#"background: 
  radial-gradient(at 40% 20%, hsla(270,100%,70%,1) 0px, transparent 50%),
  radial-gradient(at 80% 0%, hsla(320,100%,70%,1) 0px, transparent 50%),
  radial-gradient(at 0% 50%, hsla(250,100%,70%,1) 0px, transparent 50%),
  radial-gradient(at 80% 50%, hsla(280,100%,60%,1) 0px, transparent 50%),
  radial-gradient(at 0% 100%, hsla(300,100%,70%,1) 0px, transparent 50%),
  hsla(260, 50%, 10%, 1);"#,
    },
    Gradient {
        id: "cyberpunk-neon",
        name: "Cyberpunk Neon",
        description: "High contrast neon with glowing border effect",
        category: GradientCategory::Neon,
        usage: "Gaming interfaces, dark themes, futuristic designs",
        css: r#"background: #0a0a0a;
border: 2px solid transparent;
border-radius: 16px;
background-clip: padding-box;
position: relative;

&::before {
  content: '';
  position: absolute;
  inset: -2px;
  background: linear-gradient(135deg, #ff00ff, #00ffff);
  border-radius: inherit;
  z-index: -1;
}

box-shadow: 
  0 0 20px rgba(255, 0, 255, 0.5),
  0 0 40px rgba(0, 255, 255, 0.3),
  inset 0 0 20px rgba(255, 0, 255, 0.1);
animation: neonPulse 2s ease-in-out infinite;

@keyframes neonPulse {
  0%, 100% { box-shadow: 0 0 20px rgba(255, 0, 255, 0.5); }
  50% { box-shadow: 0 0 40px rgba(255, 0, 255, 0.8); }
}"#,
    },
    Gradient {
        id: "liquid-chrome",
        name: "Liquid Chrome",
        description: "Reflective metallic surface with liquid feel",
        category: GradientCategory::Metallic,
        usage: "Luxury brands, premium products, 3D interfaces",
        css: r#"background: linear-gradient(
  135deg,
  #8e8e8e 0%,
  #d4d4d4 20%,
  #ffffff 40%,
  #8e8e8e 60%,
  #d4d4d4 80%,
  #8e8e8e 100%
);
position: relative;
animation: shimmer 3s ease-in-out infinite;

&::after {
  content: '';
  position: absolute;
  inset: 0;
  background: linear-gradient(
    180deg,
    rgba(255,255,255,0.4) 0%,
    transparent 50%,
    rgba(0,0,0,0.2) 100%
  );
}

@keyframes shimmer {
  0% { background-position: -200% center; }
  100% { background-position: 200% center; }
}"#,
    },
    Gradient {
        id: "frosted-glass",
        name: "Frosted Glass",
        description: "Modern glass morphism with backdrop blur",
        category: GradientCategory::Glass,
        usage: "Modal overlays, cards, modern UI elements",
        css: r#"background: rgba(255, 255, 255, 0.1);
backdrop-filter: blur(16px);
-webkit-backdrop-filter: blur(16px);
border: 1px solid rgba(255, 255, 255, 0.2);
border-radius: 16px;
box-shadow: 
  0 8px 32px 0 rgba(31, 38, 135, 0.37),
  inset 0 0 0 1px rgba(255, 255, 255, 0.1);

&::before {
  content: '';
  position: absolute;
  inset: 0;
  background: linear-gradient(
    135deg,
    rgba(255,255,255,0.2) 0%,
    transparent 50%,
    rgba(255,255,255,0.1) 100%
  );
  border-radius: inherit;
  pointer-events: none;
}"#,
    },
    Gradient {
        id: "sunset-waves",
        name: "Sunset Waves",
        description: "Warm flowing gradient inspired by sunsets",
        category: GradientCategory::Organic,
        usage: "Lifestyle apps, travel websites, warm themes",
        css: r#"background: linear-gradient(125deg, #2d1b4e, #1a1a2e, #0f0f23);
position: relative;
overflow: hidden;

&::before {
  content: '';
  position: absolute;
  top: 0;
  left: -100%;
  width: 200%;
  height: 100%;
  background: linear-gradient(
    90deg,
    transparent,
    rgba(255, 100, 50, 0.3),
    rgba(255, 200, 50, 0.2),
    transparent
  );
  animation: sunset 5s ease-in-out infinite;
}

@keyframes sunset {
  0%, 100% { transform: translateX(-50%); }
  50% { transform: translateX(50%); }
}"#,
    },
    Gradient {
        id: "ocean-depths",
        name: "Ocean Depths",
        description: "Deep sea gradient with cyan and blue tones",
        category: GradientCategory::Mesh,
        usage: "Marine apps, meditation, cool themes",
        css: r#"background: 
  radial-gradient(at 0% 0%, hsla(190,100%,50%,0.8) 0px, transparent 50%),
  radial-gradient(at 100% 0%, hsla(220,100%,60%,0.8) 0px, transparent 50%),
  radial-gradient(at 100% 100%, hsla(240,100%,50%,0.8) 0px, transparent 50%),
  radial-gradient(at 0% 100%, hsla(200,100%,40%,0.8) 0px, transparent 50%),
  hsla(220, 50%, 10%, 1);"#,
    },
    Gradient {
        id: "electric-blue",
        name: "Electric Blue",
        description: "Pulsing electric blue neon effect",
        category: GradientCategory::Neon,
        usage: "Tech interfaces, gaming, futuristic UI",
        css: r#"background: #0a0a0a;
border: 2px solid #00ffff;
border-radius: 16px;
box-shadow: 
  0 0 10px #00ffff,
  0 0 20px #00ffff,
  0 0 40px #00ffff,
  inset 0 0 20px rgba(0, 255, 255, 0.1);
animation: electricPulse 2s ease-in-out infinite;

@keyframes electricPulse {
  0%, 100% {
    box-shadow: 0 0 10px #00ffff, 0 0 20px #00ffff, 0 0 40px #00ffff;
  }
  50% {
    box-shadow: 0 0 20px #00ffff, 0 0 40px #00ffff, 0 0 60px #00ffff;
  }
}"#,
    },
    Gradient {
        id: "rose-gold",
        name: "Rose Gold",
        description: "Elegant rose gold metallic finish",
        category: GradientCategory::Metallic,
        usage: "Luxury products, fashion, premium services",
        css: r#"background: linear-gradient(
  135deg,
  #b76e79 0%,
  #e8c4c4 25%,
  #f4e4e4 50%,
  #e8c4c4 75%,
  #b76e79 100%
);
position: relative;

&::before {
  content: '';
  position: absolute;
  inset: 0;
  background: linear-gradient(
    180deg,
    rgba(255,255,255,0.3) 0%,
    transparent 40%,
    rgba(0,0,0,0.1) 100%
  );
}"#,
    },
    Gradient {
        id: "dark-crystal",
        name: "Dark Crystal",
        description: "Dark glass with purple crystal tint",
        category: GradientCategory::Glass,
        usage: "Dark mode UI, dashboards, premium apps",
        css: r#"background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
position: relative;

.glass-layer {
  background: rgba(147, 51, 234, 0.1);
  backdrop-filter: blur(16px);
  -webkit-backdrop-filter: blur(16px);
  border: 1px solid rgba(147, 51, 234, 0.2);
  border-radius: 16px;
  box-shadow: 
    0 8px 32px 0 rgba(31, 38, 135, 0.37),
    inset 0 0 0 1px rgba(255, 255, 255, 0.1);
}"#,
    },
    Gradient {
        id: "candy-floss",
        name: "Candy Floss",
        description: "Soft pastel gradient with pink and blue",
        category: GradientCategory::Organic,
        usage: "Kids apps, creative tools, playful interfaces",
        css: r#"background: linear-gradient(
  135deg,
  #ff9a9e 0%,
  #fecfef 50%,
  #fecfef 50%,
  #a8edea 100%
);
position: relative;

&::after {
  content: '';
  position: absolute;
  inset: 0;
  background: radial-gradient(
    circle at 30% 30%,
    rgba(255, 255, 255, 0.3) 0%,
    transparent 50%
  );
}"#,
    },
    Gradient {
        id: "northern-lights",
        name: "Northern Lights",
        description: "Green aurora effect with flowing motion",
        category: GradientCategory::Aurora,
        usage: "Nature apps, environmental themes, night mode",
        css: r#"background: linear-gradient(125deg, #0a1628, #1a3a3a, #0a1628);
position: relative;
overflow: hidden;

&::before {
  content: '';
  position: absolute;
  top: -50%;
  left: -50%;
  width: 200%;
  height: 200%;
  background: linear-gradient(
    45deg,
    transparent 40%,
    rgba(50, 255, 100, 0.2) 50%,
    transparent 60%
  );
  animation: aurora 8s linear infinite;
}

@keyframes aurora {
  0% { transform: translateX(-50%) rotate(0deg); }
  100% { transform: translateX(50%) rotate(360deg); }
}"#,
    },
];
